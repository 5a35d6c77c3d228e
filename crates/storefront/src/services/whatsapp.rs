//! WhatsApp order relay.
//!
//! Builds the pt-BR order messages and the `wa.me` deep links that carry
//! them. Nothing is sent from here; the caller opens or prints the link and
//! the messaging app takes over.

use thiserror::Error;
use url::Url;

use feira_core::{Phone, format_brl};

use crate::config::RelayConfig;
use crate::models::Order;

/// Fixed footer on every relayed order.
const ORDER_FOOTER: &str = "Pedido realizado através da Plataforma de Eventos";

/// Errors that can occur while building a relay link.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The order was placed without an event, so there is nobody to relay
    /// it to.
    #[error("order has no organizer phone")]
    MissingOrganizerPhone,

    /// The assembled deep link is not a valid URL.
    #[error("invalid relay link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// WhatsApp relay for order notifications.
pub struct WhatsappRelay<'a> {
    config: &'a RelayConfig,
}

impl<'a> WhatsappRelay<'a> {
    /// Create a new relay.
    #[must_use]
    pub const fn new(config: &'a RelayConfig) -> Self {
        Self { config }
    }

    /// Message telling the organizer a new order came in.
    #[must_use]
    pub fn order_message(&self, order: &Order) -> String {
        let items = order
            .items
            .iter()
            .map(|line| {
                format!(
                    "• {}x {} - {}",
                    line.quantity,
                    line.item.name,
                    format_brl(line.subtotal())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "🎉 *NOVO PEDIDO - {}*\n\n\
             👤 *Cliente:* {}\n\
             📱 *Telefone:* {}\n\n\
             📋 *Itens do Pedido:*\n{}\n\n\
             💰 *Total:* {}\n\n\
             📅 *Data:* {}\n\n\
             ---\n{ORDER_FOOTER}",
            order.id,
            order.customer_name,
            order.customer_phone,
            items,
            format_brl(order.total_amount),
            order.created_at.format("%d/%m/%Y, %H:%M:%S"),
        )
    }

    /// Message telling the customer their order was confirmed.
    #[must_use]
    pub fn confirmation_message(&self, order: &Order, event_name: &str) -> String {
        let items = order
            .items
            .iter()
            .map(|line| format!("• {}x {}", line.quantity, line.item.name))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "✅ *PEDIDO CONFIRMADO*\n\n\
             Olá {}! Seu pedido foi confirmado.\n\n\
             🎪 *Evento:* {}\n\
             🆔 *Número do Pedido:* {}\n\n\
             📋 *Seus Itens:*\n{}\n\n\
             💰 *Total:* {}\n\n\
             Em breve você receberá mais informações sobre a retirada do seu pedido.\n\n\
             Obrigado pela preferência! 🙏",
            order.customer_name,
            event_name,
            order.id,
            items,
            format_brl(order.total_amount),
        )
    }

    /// Deep link that opens a chat with the organizer, message prefilled.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MissingOrganizerPhone` for counter-sale orders.
    pub fn order_link(&self, order: &Order) -> Result<Url, RelayError> {
        let phone = order
            .organizer_phone
            .as_ref()
            .ok_or(RelayError::MissingOrganizerPhone)?;
        self.link(phone, &self.order_message(order))
    }

    /// Deep link that opens a chat with the customer, confirmation prefilled.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::InvalidLink` if the link does not parse.
    pub fn confirmation_link(&self, order: &Order, event_name: &str) -> Result<Url, RelayError> {
        self.link(
            &order.customer_phone,
            &self.confirmation_message(order, event_name),
        )
    }

    fn link(&self, phone: &Phone, message: &str) -> Result<Url, RelayError> {
        let raw = format!(
            "https://{}/{}{}?text={}",
            self.config.host,
            self.config.country_code,
            phone.digits(),
            urlencoding::encode(message),
        );
        Ok(Url::parse(&raw)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use feira_core::{Category, OrderId, OrderStatus, PaymentMethod};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{CartLine, MenuItem};

    fn order() -> Order {
        let pastel = MenuItem::new("Pastel", "", Decimal::new(85, 1), "", Category::Food);
        let caldo = MenuItem::new("Caldo", "", Decimal::new(120, 1), "", Category::Food);
        Order {
            id: OrderId::new("order-1"),
            event_id: None,
            items: vec![
                CartLine {
                    item: pastel,
                    quantity: 2,
                },
                CartLine {
                    item: caldo,
                    quantity: 1,
                },
            ],
            total_amount: Decimal::new(290, 1),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Pix,
            created_at: Utc::now(),
            customer_name: "Maria".to_owned(),
            customer_phone: Phone::parse("(11) 98888-7777").unwrap(),
            organizer_phone: Some(Phone::parse("(21) 91234-5678").unwrap()),
        }
    }

    #[test]
    fn test_order_message_lists_items_with_subtotals() {
        let config = RelayConfig::default();
        let message = WhatsappRelay::new(&config).order_message(&order());

        assert!(message.starts_with("🎉 *NOVO PEDIDO - order-1*"));
        assert!(message.contains("👤 *Cliente:* Maria"));
        assert!(message.contains("📱 *Telefone:* (11) 98888-7777"));
        assert!(message.contains("• 2x Pastel - R$ 17,00"));
        assert!(message.contains("• 1x Caldo - R$ 12,00"));
        assert!(message.contains("💰 *Total:* R$ 29,00"));
        assert!(message.ends_with(ORDER_FOOTER));
    }

    #[test]
    fn test_confirmation_message_names_the_event_and_skips_prices() {
        let config = RelayConfig::default();
        let message =
            WhatsappRelay::new(&config).confirmation_message(&order(), "Festa Junina");

        assert!(message.starts_with("✅ *PEDIDO CONFIRMADO*"));
        assert!(message.contains("Olá Maria! Seu pedido foi confirmado."));
        assert!(message.contains("🎪 *Evento:* Festa Junina"));
        assert!(message.contains("🆔 *Número do Pedido:* order-1"));
        assert!(message.contains("• 2x Pastel\n"));
        assert!(!message.contains("Pastel - R$"));
        assert!(message.ends_with("Obrigado pela preferência! 🙏"));
    }

    #[test]
    fn test_order_link_targets_the_organizer() {
        let config = RelayConfig::default();
        let link = WhatsappRelay::new(&config).order_link(&order()).unwrap();

        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/5521912345678");
        let query = link.query().unwrap();
        assert!(query.starts_with("text="));
        assert!(query.contains("NOVO%20PEDIDO"));
    }

    #[test]
    fn test_order_link_needs_an_organizer_phone() {
        let config = RelayConfig::default();
        let mut counter_sale = order();
        counter_sale.organizer_phone = None;

        let err = WhatsappRelay::new(&config)
            .order_link(&counter_sale)
            .unwrap_err();
        assert!(matches!(err, RelayError::MissingOrganizerPhone));
    }

    #[test]
    fn test_confirmation_link_targets_the_customer() {
        let config = RelayConfig::default();
        let link = WhatsappRelay::new(&config)
            .confirmation_link(&order(), "Festa Junina")
            .unwrap();

        assert_eq!(link.path(), "/5511988887777");
    }
}
