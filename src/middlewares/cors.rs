use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // 转盘页与管理面板来自不同源, 生产环境应收紧为白名单
            true
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 无鉴权 Header, 但放宽以免前端自定义 Header 预检失败
        .allow_any_header()
        .max_age(3600)
}
