//! Confirmation document templating.

use chrono::{NaiveDate, Utc};
use recon_core::{round2, ExternalRecord};

/// Selling party printed on every confirmation.
const SELLER: &str = "MCMAHON Investments";

/// Fixed expiration date of the simulated transactions.
const EXPIRATION_DATE: &str = "2026-12-31";

/// Premium as a fraction of the strike.
const PREMIUM_RATE: f64 = 0.10;

/// Fixed spread over strike used by the cash settlement illustration.
const SETTLEMENT_SPREAD: f64 = 2.0;

/// Renders external records into OTC equity index option confirmations.
///
/// Rendering is pure: the same record, party label and letter date always
/// produce the same document.
pub struct ConfirmationRenderer {
    party: String,
    letter_date: NaiveDate,
}

impl ConfirmationRenderer {
    /// Creates a renderer for the given party label, dated today.
    pub fn new(party: impl Into<String>) -> Self {
        Self {
            party: party.into(),
            letter_date: Utc::now().date_naive(),
        }
    }

    /// Overrides the letter date (tests and replays).
    pub fn with_letter_date(mut self, date: NaiveDate) -> Self {
        self.letter_date = date;
        self
    }

    /// The party label stamped on the letterhead and buyer line.
    pub fn party(&self) -> &str {
        &self.party
    }

    /// Renders one confirmation document.
    pub fn render(&self, record: &ExternalRecord) -> String {
        let mut doc = String::new();
        doc.push_str(&self.header());
        doc.push_str(&self.introduction());
        doc.push_str(&self.general_terms(record));
        doc.push_str(&self.exercise_terms());
        doc.push_str(&self.settlement_terms(record));
        doc.push_str(&self.closing());
        doc
    }

    fn header(&self) -> String {
        "Confirmation of OTC Equity Index Option Transaction\n\
         ===================================================\n\n"
            .to_string()
    }

    fn introduction(&self) -> String {
        format!(
            "[Letterhead of {party}]\n\n\
             Date: {date}\n\
             To: Counterparty ({seller})\n\n\
             Dear Sir or Madam,\n\n\
             The purpose of this Confirmation is to confirm the terms and conditions of the \
             OTC Equity Index Option Transaction entered into between us on the Trade Date \
             specified below (the \"Transaction\"). This Confirmation constitutes a \
             \"Confirmation\" as referred to in the ISDA Master Agreement between the parties.\n\n",
            party = self.party,
            date = self.letter_date.format("%Y-%m-%d"),
            seller = SELLER,
        )
    }

    fn general_terms(&self, record: &ExternalRecord) -> String {
        let trade = &record.trade;
        let premium = round2(trade.price * PREMIUM_RATE);
        format!(
            "General Terms:\n\
             --------------\n\
             Trade ID: {id}\n\
             Trade Date: {timestamp}\n\
             Option Style: {style}\n\
             Option Type: {option_type}\n\
             Seller: {seller}\n\
             Buyer: {party} Party B\n\
             Index: {symbol} Equity Index\n\
             Number of Options: {quantity}\n\
             Strike Price: ${price:.2}\n\
             Premium: ${premium:.2}\n\
             Premium Payment Date: T+1\n\
             Exchange: NASDAQ\n\
             Calculation Agent: {seller} (binding in absence of manifest error)\n\n",
            id = record.id.confirmation_id(),
            timestamp = trade.timestamp.format("%Y-%m-%d %H:%M:%S"),
            style = trade.style,
            option_type = trade.option_type,
            seller = SELLER,
            party = self.party,
            symbol = trade.symbol,
            quantity = trade.quantity,
            price = trade.price,
            premium = premium,
        )
    }

    fn exercise_terms(&self) -> String {
        format!(
            "Procedure for Exercise:\n\
             -----------------------\n\
             Exercise Period: Expiration Date only\n\
             Expiration Date: {expiration}\n\
             Automatic Exercise: If not previously exercised, the Option shall be \
             automatically exercised on the Expiration Date.\n\
             Valuation Time: 4:00 PM EST\n\
             Valuation Date: Expiration Date\n\n",
            expiration = EXPIRATION_DATE,
        )
    }

    fn settlement_terms(&self, record: &ExternalRecord) -> String {
        let trade = &record.trade;
        // Illustrative settlement value: a fixed spread over strike per option.
        let amount = round2(SETTLEMENT_SPREAD * trade.quantity as f64);
        format!(
            "Cash Settlement Terms:\n\
             ----------------------\n\
             Cash Settlement: Applicable\n\
             Cash Settlement Amount: ${amount:.2}\n\
             Cash Settlement Payment Date: T+3\n\
             Currency: USD\n\n",
            amount = amount,
        )
    }

    fn closing(&self) -> String {
        format!(
            "This Confirmation will be governed by and construed in accordance with the laws \
             of New York.\n\n\
             Please confirm that the foregoing correctly sets forth the terms of our agreement \
             by signing and returning this Confirmation.\n\n\
             Yours sincerely,\n\n\
             {party}\n\
             By: _______________________\n\
             Name:\n\
             Title:\n\n\
             Confirmed and agreed:\n\n\
             Counterparty\n\
             By: _______________________\n\
             Name:\n\
             Title:\n",
            party = self.party,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use recon_core::{GroundTruthId, OptionStyle, OptionType, TradeRecord};

    fn record(id: u64) -> ExternalRecord {
        ExternalRecord {
            id: GroundTruthId(id),
            trade: TradeRecord {
                timestamp: chrono::Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap(),
                symbol: "AAPL".to_string(),
                quantity: 40,
                price: 185.0,
                style: OptionStyle::European,
                option_type: OptionType::Call,
                instrument_name: "Apple Inc.".to_string(),
                sector: "Technology".to_string(),
                market_cap: Some(2.9e12),
            },
        }
    }

    fn renderer() -> ConfirmationRenderer {
        ConfirmationRenderer::new("External")
            .with_letter_date(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
    }

    #[test]
    fn document_carries_the_zero_padded_trade_id() {
        let doc = renderer().render(&record(7));
        assert!(doc.contains("Trade ID: 00007"));
    }

    #[test]
    fn general_terms_reflect_the_record_fields() {
        let doc = renderer().render(&record(0));
        assert!(doc.contains("Option Style: European"));
        assert!(doc.contains("Option Type: Call"));
        assert!(doc.contains("Index: AAPL Equity Index"));
        assert!(doc.contains("Number of Options: 40"));
        assert!(doc.contains("Strike Price: $185.00"));
        // Premium is 10% of strike.
        assert!(doc.contains("Premium: $18.50"));
    }

    #[test]
    fn settlement_amount_is_spread_times_quantity() {
        // (price + 2.0 - price) * 40 = 80.00
        let doc = renderer().render(&record(0));
        assert!(doc.contains("Cash Settlement Amount: $80.00"));
    }

    #[test]
    fn rendering_is_pure() {
        let a = renderer().render(&record(3));
        let b = renderer().render(&record(3));
        assert_eq!(a, b);
    }

    #[test]
    fn party_label_appears_on_letterhead_and_buyer_line() {
        let doc = renderer().render(&record(0));
        assert!(doc.contains("[Letterhead of External]"));
        assert!(doc.contains("Buyer: External Party B"));
    }
}
