use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pastry_shop::config::ServerConfig;
use pastry_shop::db::establish_connection_pool;
use pastry_shop::mail::{Mailer, build_mailer};
use pastry_shop::media::LocalMediaStore;
use pastry_shop::repository::DieselRepository;
use pastry_shop::routes::categories::{
    create_category, delete_category, list_categories, update_category,
};
use pastry_shop::routes::content::{get_content, update_content};
use pastry_shop::routes::email::send_email;
use pastry_shop::routes::orders::{
    create_order, delete_order, get_order, list_orders, update_order,
};
use pastry_shop::routes::predefined::{
    create_flavor, create_size, delete_flavor, delete_size, list_flavors, list_sizes,
};
use pastry_shop::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use pastry_shop::routes::upload::{upload_carte, upload_images};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let server_config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let media = match LocalMediaStore::new(
        &server_config.upload_dir,
        server_config.public_upload_url.as_str(),
    ) {
        Ok(media) => media,
        Err(e) => {
            log::error!(
                "Failed to prepare upload directory {}: {e}",
                server_config.upload_dir.display()
            );
            std::process::exit(1);
        }
    };

    let mailer: Arc<dyn Mailer> = match build_mailer(&server_config.mail) {
        Ok(mailer) => Arc::from(mailer),
        Err(e) => {
            log::error!("Failed to configure mailer: {e}");
            std::process::exit(1);
        }
    };
    let mailer = web::Data::from(mailer);

    let address = server_config.address.clone();
    let port = server_config.port;
    let upload_dir = server_config.upload_dir.clone();

    log::info!("Listening on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/uploads", upload_dir.clone()))
            .service(
                web::scope("/api")
                    .service(list_products)
                    .service(get_product)
                    .service(create_product)
                    .service(update_product)
                    .service(delete_product)
                    .service(list_categories)
                    .service(create_category)
                    .service(update_category)
                    .service(delete_category)
                    .service(list_sizes)
                    .service(create_size)
                    .service(delete_size)
                    .service(list_flavors)
                    .service(create_flavor)
                    .service(delete_flavor)
                    .service(list_orders)
                    .service(get_order)
                    .service(create_order)
                    .service(update_order)
                    .service(delete_order)
                    .service(get_content)
                    .service(update_content)
                    .service(upload_images)
                    .service(upload_carte)
                    .service(send_email),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(media.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(mailer.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
