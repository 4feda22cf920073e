use actix_web::web;

pub mod routes {
    pub mod parts;
}
mod service {
    pub(crate) mod parts;
}
mod dtos {
    pub(crate) mod parts;
}

pub fn mount_parts() -> actix_web::Scope {
    web::scope("/parts")
        .service(routes::parts::get_search)
        .service(routes::parts::post_request)
}
