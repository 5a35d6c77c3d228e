//! PIX payment payload encoder.
//!
//! Builds the EMV-style "copia e cola" string a PIX app accepts as pasted
//! text or a QR code. The payload is a flat run of fields, each `tag` (two
//! digits) + `length` (two decimal digits) + `value`, with nested fields
//! repeating the scheme inside the value. Everything must be ASCII by the
//! time it is length-prefixed.

use crc::{CRC_16_IBM_3740, Crc};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use feira_core::two_decimals;

use crate::config::MerchantConfig;
use crate::models::Order;

/// Payload format indicator, version 01.
const PAYLOAD_FORMAT: &str = "000201";

/// Merchant category code, 0000 = unspecified.
const MERCHANT_CATEGORY: &str = "52040000";

/// Transaction currency, ISO 4217 numeric 986 = BRL.
const CURRENCY_BRL: &str = "5303986";

/// GUI naming the PIX arrangement inside the merchant account field.
const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Checksum carried in tag 63 (poly 0x1021, init 0xFFFF).
const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Errors that can occur while encoding a payload.
#[derive(Debug, Error)]
pub enum PixError {
    /// A value is longer than the two-digit length prefix can describe.
    #[error("field {tag} is {len} chars long, limit is 99")]
    FieldTooLong { tag: &'static str, len: usize },
}

/// Encode the payable payload for an order.
///
/// The amount is the order total with exactly two decimal digits; the order
/// id rides along as the transaction reference so the incoming payment can
/// be matched back to the order.
///
/// # Errors
///
/// Returns `PixError::FieldTooLong` if a merchant field or the key cannot
/// fit a two-digit length prefix.
pub fn payload(order: &Order, merchant: &MerchantConfig) -> Result<String, PixError> {
    let account = format!(
        "{}{}",
        field("00", PIX_GUI)?,
        field("01", &merchant.pix_key)?
    );

    let mut out = String::from(PAYLOAD_FORMAT);
    out.push_str(&field("26", &account)?);
    out.push_str(MERCHANT_CATEGORY);
    out.push_str(CURRENCY_BRL);
    out.push_str(&field("54", &two_decimals(order.total_amount))?);
    out.push_str(&field("59", &ascii_fold(&merchant.name))?);
    out.push_str(&field("60", &ascii_fold(&merchant.city))?);
    out.push_str(&field("62", &field("05", order.id.as_str())?)?);

    // The checksum covers everything up to and including its own tag and
    // length, then lands as four uppercase hex digits.
    out.push_str("6304");
    let check = CRC16.checksum(out.as_bytes());
    out.push_str(&format!("{check:04X}"));

    Ok(out)
}

/// One tag/length/value field.
fn field(tag: &'static str, value: &str) -> Result<String, PixError> {
    let len = value.chars().count();
    if len > 99 {
        return Err(PixError::FieldTooLong { tag, len });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Fold diacritics away and drop whatever else is not ASCII.
fn ascii_fold(value: &str) -> String {
    value.nfd().filter(char::is_ascii).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use feira_core::{OrderId, OrderStatus, PaymentMethod, Phone};
    use rust_decimal::Decimal;

    use super::*;

    fn order_totalling(total: Decimal) -> Order {
        Order {
            id: OrderId::new("order-1"),
            event_id: None,
            items: Vec::new(),
            total_amount: total,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Pix,
            created_at: Utc::now(),
            customer_name: "Maria".to_owned(),
            customer_phone: Phone::parse("11988887777").unwrap(),
            organizer_phone: None,
        }
    }

    #[test]
    fn test_checksum_parameters_match_ccitt_false() {
        assert_eq!(CRC16.checksum(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_payload_opens_with_format_and_account() {
        let payload = payload(&order_totalling(Decimal::new(55, 1)), &MerchantConfig::default())
            .unwrap();

        assert!(payload.starts_with("000201"));
        assert!(payload.contains(
            "26580014BR.GOV.BCB.PIX0136123e4567-e89b-12d3-a456-426614174000"
        ));
        assert!(payload.contains("52040000"));
        assert!(payload.contains("5303986"));
    }

    #[test]
    fn test_amount_always_carries_two_decimals() {
        let merchant = MerchantConfig::default();
        let cases = [
            (Decimal::new(5, 0), "54045.00"),
            (Decimal::new(55, 1), "54045.50"),
            (Decimal::new(555, 2), "54045.55"),
            (Decimal::new(125, 1), "540512.50"),
        ];

        for (total, expected) in cases {
            let payload = payload(&order_totalling(total), &merchant).unwrap();
            assert!(payload.contains(expected), "{total} missing {expected}");
        }
    }

    #[test]
    fn test_merchant_fields_are_folded_to_ascii() {
        let merchant = MerchantConfig {
            name: "São João Cantina".to_owned(),
            city: "São Paulo".to_owned(),
            ..MerchantConfig::default()
        };

        let payload = payload(&order_totalling(Decimal::new(5, 0)), &merchant).unwrap();
        assert!(payload.contains("5916Sao Joao Cantina"));
        assert!(payload.contains("6009Sao Paulo"));
        assert!(payload.is_ascii());
    }

    #[test]
    fn test_order_id_rides_in_the_reference_field() {
        let payload = payload(&order_totalling(Decimal::new(5, 0)), &MerchantConfig::default())
            .unwrap();

        assert!(payload.contains("62110507order-1"));
    }

    #[test]
    fn test_checksum_verifies_over_the_whole_payload() {
        let payload = payload(&order_totalling(Decimal::new(125, 1)), &MerchantConfig::default())
            .unwrap();

        let (body, check) = payload.split_at(payload.len() - 4);
        assert!(body.ends_with("6304"));
        assert_eq!(format!("{:04X}", CRC16.checksum(body.as_bytes())), check);
    }

    #[test]
    fn test_oversized_merchant_name_is_rejected() {
        let merchant = MerchantConfig {
            name: "X".repeat(120),
            ..MerchantConfig::default()
        };

        let err = payload(&order_totalling(Decimal::new(5, 0)), &merchant).unwrap_err();
        assert!(matches!(err, PixError::FieldTooLong { tag: "59", len: 120 }));
    }
}
