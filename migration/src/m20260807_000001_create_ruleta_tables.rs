use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;

/// Productos (转盘奖品配置表)
#[derive(DeriveIden)]
enum Productos {
    Table,
    Id,
    Nombre,
    Tipo,
    Puntos,
    Stock,
    Probabilidad,
    Activo,
    ImagenUrl,
    Color,
    FechaCreacion,
    FechaActualizacion,
}

/// Usuarios (用户积分账本)
#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    Puntos,
    GirosRealizados,
    Nivel,
    Experiencia,
    FechaRegistro,
    UltimoGiro,
}

/// Premios Obtenidos (中奖记录, 只追加)
#[derive(DeriveIden)]
enum PremiosObtenidos {
    Table,
    Id,
    UsuarioId,
    ProductoId,
    FechaObtencion,
    Canjeado,
    FechaCanje,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 初始奖品配置:
/// - Premio Mayor (大奖) 权重 0.05
/// - Viaje a la Playa (海滩之旅) 权重 0.08
/// - Tarjeta Regalo $50 (礼品卡) 权重 0.1
/// - Pierdes Turno (罚分) 权重 0.15
/// - Giro Extra (再转一次) 权重 0.07
///
/// stock 约定: > 0 限量, 0 已耗尽(自动停用), -1 无限
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 奖品类型枚举
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("tipo_producto"))
                    .values(vec![
                        Alias::new("prize"),
                        Alias::new("penalty"),
                        Alias::new("bonus"),
                        Alias::new("wildcard"),
                    ])
                    .to_owned(),
            )
            .await?;

        // 奖品表
        manager
            .create_table(
                Table::create()
                    .table(Productos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Productos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Productos::Nombre)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Productos::Tipo)
                            .custom(Alias::new("tipo_producto"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Productos::Puntos)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Productos::Stock)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Productos::Probabilidad)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(Productos::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Productos::ImagenUrl).string_len(200).null())
                    .col(
                        ColumnDef::new(Productos::Color)
                            .string_len(7)
                            .not_null()
                            .default("#4CAF50"),
                    )
                    .col(
                        ColumnDef::new(Productos::FechaCreacion)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Productos::FechaActualizacion)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 用户表 (id 为调用方提供的不透明字符串)
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Puntos)
                            .integer()
                            .not_null()
                            .default(100),
                    )
                    .col(
                        ColumnDef::new(Usuarios::GirosRealizados)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Nivel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Experiencia)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Usuarios::FechaRegistro)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Usuarios::UltimoGiro)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 中奖记录表
        // 注意: 不加外键 —— usuario/producto 均为弱引用, 奖品被删除后历史记录仍须可读
        manager
            .create_table(
                Table::create()
                    .table(PremiosObtenidos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PremiosObtenidos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PremiosObtenidos::UsuarioId)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PremiosObtenidos::ProductoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PremiosObtenidos::FechaObtencion)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(PremiosObtenidos::Canjeado)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PremiosObtenidos::FechaCanje)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 按用户/奖品查询记录的索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_premios_obtenidos_usuario")
                    .table(PremiosObtenidos::Table)
                    .col(PremiosObtenidos::UsuarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_premios_obtenidos_producto")
                    .table(PremiosObtenidos::Table)
                    .col(PremiosObtenidos::ProductoId)
                    .to_owned(),
            )
            .await?;

        // 转盘展示只取 activo = true 的奖品
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_productos_activo")
                    .table(Productos::Table)
                    .col(Productos::Activo)
                    .to_owned(),
            )
            .await?;

        // 初始化默认奖品数据 (迁移只执行一次, 无需防重)
        let conn = manager.get_connection();
        let insert_sql = r#"
INSERT INTO productos (nombre, tipo, puntos, stock, probabilidad, activo, color)
VALUES
 ('Premio Mayor', 'prize', 100, 1, 0.05, TRUE, '#FFD700'),
 ('Viaje a la Playa', 'prize', 80, 1, 0.08, TRUE, '#4CAF50'),
 ('Tarjeta Regalo $50', 'prize', 60, 1, 0.1, TRUE, '#2196F3'),
 ('Pierdes Turno', 'penalty', -10, -1, 0.15, TRUE, '#F44336'),
 ('Giro Extra', 'bonus', 0, -1, 0.07, TRUE, '#9C27B0');
"#;
        conn.execute(Statement::from_string(
            manager.get_database_backend(),
            insert_sql.to_string(),
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除顺序: 记录 -> 奖品 -> 用户 -> 枚举类型
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(PremiosObtenidos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(Productos::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(Usuarios::Table).to_owned())
            .await?;

        manager
            .drop_type(
                Type::drop()
                    .if_exists()
                    .name(Alias::new("tipo_producto"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
