use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::config::ServerConfig;
use crate::forms::email::EmailForm;
use crate::mail::Mailer;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::email;

#[post("/send-email")]
pub async fn send_email(
    repo: web::Data<DieselRepository>,
    mailer: web::Data<dyn Mailer>,
    server_config: web::Data<ServerConfig>,
    form: web::Json<EmailForm>,
) -> impl Responder {
    match email::send_email(
        repo.get_ref(),
        mailer.get_ref(),
        &server_config.mail,
        form.into_inner(),
    ) {
        Ok(sent) => HttpResponse::Ok().json(json!({ "sent": sent })),
        Err(err) => service_error_response("send email", err),
    }
}
