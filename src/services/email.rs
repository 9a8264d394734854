use std::fmt::Write;

use crate::config::MailConfig;
use crate::domain::order::Order;
use crate::forms::email::{ContactMessage, EmailForm, EmailRequest};
use crate::mail::{Mailer, OutgoingEmail};
use crate::repository::OrderReader;
use crate::services::{ServiceError, ServiceResult};

/// Validates the request and sends the corresponding notification(s).
///
/// Returns the number of messages delivered.
pub fn send_email<R, M>(
    repo: &R,
    mailer: &M,
    config: &MailConfig,
    form: EmailForm,
) -> ServiceResult<usize>
where
    R: OrderReader + ?Sized,
    M: Mailer + ?Sized,
{
    let request = form
        .into_request()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let messages = match request {
        EmailRequest::Contact(contact) => vec![contact_email(config, &contact)],
        EmailRequest::OrderConfirmation { order_id } => {
            let order = repo
                .get_order_by_id(order_id)
                .map_err(ServiceError::from)?
                .ok_or(ServiceError::NotFound)?;
            order_emails(config, &order)
        }
    };

    let mut failures = Vec::new();
    for message in &messages {
        if let Err(err) = mailer.send(message) {
            log::error!("Failed to send `{}` to {}: {err}", message.subject, message.to);
            failures.push(err.to_string());
        }
    }

    if failures.is_empty() {
        Ok(messages.len())
    } else {
        Err(ServiceError::Mail(failures.join("; ")))
    }
}

/// Contact form submission forwarded to the shop inbox.
pub fn contact_email(config: &MailConfig, contact: &ContactMessage) -> OutgoingEmail {
    let mut body = format!("Nom : {}\nEmail : {}\n", contact.name, contact.email);
    if let Some(phone) = &contact.phone {
        let _ = writeln!(body, "Téléphone : {phone}");
    }
    let _ = write!(body, "\n{}\n", contact.message);

    OutgoingEmail::new(
        config.shop_email.as_str(),
        format!("Nouveau message de {}", contact.name),
        body,
    )
    .with_reply_to(contact.email.as_str())
}

/// Order confirmation for the shop and for the customer.
pub fn order_emails(config: &MailConfig, order: &Order) -> Vec<OutgoingEmail> {
    let summary = order_summary(order);

    let shop = OutgoingEmail::new(
        config.shop_email.as_str(),
        format!("Nouvelle commande {}", order.code),
        format!(
            "Client : {} ({}, {})\n\n{summary}",
            order.client.name, order.client.phone, order.client.email
        ),
    )
    .with_reply_to(order.client.email.as_str());

    let customer = OutgoingEmail::new(
        order.client.email.as_str(),
        format!("Confirmation de votre commande {}", order.code),
        format!(
            "Bonjour {},\n\nNous avons bien reçu votre commande.\n\n{summary}\nÀ bientôt !\n",
            order.client.name
        ),
    )
    .with_reply_to(config.shop_email.as_str());

    vec![shop, customer]
}

fn order_summary(order: &Order) -> String {
    let mut summary = format!(
        "Commande : {}\nRetrait : {} à {}\n\n",
        order.code,
        order.pickup.date.format("%d/%m/%Y"),
        order.pickup.time
    );
    for item in &order.items {
        let _ = writeln!(summary, "- {} x {} : {} €", item.quantity, item.name, item.price);
    }
    let _ = writeln!(summary, "\nTotal : {} €", order.total_price);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::cart::{CartKey, CartLineItem};
    use crate::domain::order::{ClientInfo, OrderStatus, PickupDetails};
    use crate::forms::email::{ContactForm, OrderEmailForm};
    use crate::mail::MailError;
    use crate::mail::mock::MockMailer;
    use crate::repository::mock::MockOrderReader;

    fn config() -> MailConfig {
        MailConfig {
            from: "commandes@example.com".to_string(),
            shop_email: "shop@example.com".to_string(),
            smtp: None,
        }
    }

    fn order() -> Order {
        Order {
            id: 9,
            code: "CMD-20241224-ABC123".to_string(),
            client: ClientInfo {
                name: "Marie".to_string(),
                phone: "0612345678".to_string(),
                email: "marie@example.com".to_string(),
            },
            pickup: PickupDetails {
                date: NaiveDate::from_ymd_opt(2024, 12, 24).unwrap_or_default(),
                time: "10h".to_string(),
            },
            items: vec![
                CartLineItem::new(
                    CartKey::pack(
                        3,
                        "6 parts",
                        vec!["Vanille".to_string(), "Chocolat".to_string()],
                    ),
                    "Macarons (6 parts) - Vanille, Chocolat",
                    "30",
                    "",
                )
                .with_quantity(2),
            ],
            total_price: "60.00".to_string(),
            status: OrderStatus::Pending,
            notes: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn contact_message_goes_to_shop_with_reply_to() {
        let orders = MockOrderReader::new();
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .withf(|email| {
                assert_eq!(email.to, "shop@example.com");
                assert_eq!(email.reply_to.as_deref(), Some("jean@example.com"));
                assert!(email.body.contains("Bonjour"));
                true
            })
            .returning(|_| Ok(()));

        let form = EmailForm::Contact(ContactForm {
            name: "Jean".to_string(),
            email: "jean@example.com".to_string(),
            phone: None,
            message: "Bonjour".to_string(),
        });

        let sent = send_email(&orders, &mailer, &config(), form).expect("expected success");
        assert_eq!(sent, 1);
    }

    #[test]
    fn order_confirmation_goes_to_shop_and_customer() {
        let mut orders = MockOrderReader::new();
        orders
            .expect_get_order_by_id()
            .withf(|id| *id == 9)
            .returning(|_| Ok(Some(order())));

        let mut mailer = MockMailer::new();
        mailer.expect_send().times(2).returning(|_| Ok(()));

        let form = EmailForm::Order(OrderEmailForm { order_id: 9 });
        let sent = send_email(&orders, &mailer, &config(), form).expect("expected success");

        assert_eq!(sent, 2);
    }

    #[test]
    fn order_summary_lists_lines_and_total() {
        let emails = order_emails(&config(), &order());

        assert_eq!(emails[0].to, "shop@example.com");
        assert_eq!(emails[1].to, "marie@example.com");
        assert!(emails[1].body.contains("2 x Macarons (6 parts) - Vanille, Chocolat : 30 €"));
        assert!(emails[1].body.contains("Total : 60.00 €"));
        assert!(emails[1].body.contains("24/12/2024"));
    }

    #[test]
    fn missing_order_is_not_found() {
        let mut orders = MockOrderReader::new();
        orders.expect_get_order_by_id().returning(|_| Ok(None));
        let mailer = MockMailer::new();

        let form = EmailForm::Order(OrderEmailForm { order_id: 1 });

        assert!(matches!(
            send_email(&orders, &mailer, &config(), form),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn delivery_failure_is_reported() {
        let orders = MockOrderReader::new();
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .returning(|_| Err(MailError::Transport("connection refused".to_string())));

        let form = EmailForm::Contact(ContactForm {
            name: "Jean".to_string(),
            email: "jean@example.com".to_string(),
            phone: Some("0600000000".to_string()),
            message: "Bonjour".to_string(),
        });

        assert!(matches!(
            send_email(&orders, &mailer, &config(), form),
            Err(ServiceError::Mail(_))
        ));
    }
}
