use actix_web::web;

pub mod routes {
    pub mod orders;
}
mod service {
    pub(crate) mod orders;
}
mod dtos {
    pub(crate) mod orders;
}

pub fn mount_orders() -> actix_web::Scope {
    web::scope("/orders")
        .service(routes::orders::post_order)
        .service(routes::orders::get_order)
}
