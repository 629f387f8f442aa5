//! Text rendering of the price board.
use price_common::price::format_price;
use price_common::{Currency, PriceBoard};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

/// Cell text for a price the API did not return.
pub const MISSING: &str = "n/a";

/// Renders `board` as a table: coins down the side, currencies across the top.
pub fn render(board: &PriceBoard) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(board.currencies.iter().map(Currency::header));
    builder.push_record(header);

    for row in &board.rows {
        let mut record = vec![row.coin.label()];
        record.extend(row.prices.iter().map(|price| match price {
            Some(value) => format_price(*value),
            None => MISSING.to_string(),
        }));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use price_common::price::SimplePriceResponse;
    use price_common::Coin;

    fn board(currencies: &[Currency]) -> PriceBoard {
        let coins: Vec<Coin> = ["bitcoin", "ethereum", "notacoin"]
            .iter()
            .map(|id| id.parse().unwrap())
            .collect();
        let response = SimplePriceResponse::from_slice(
            br#"{"bitcoin":{"usd":67012.5,"eur":61800,"gbp":52900.4},"ethereum":{"usd":3500.1,"eur":3230.4}}"#,
        )
        .unwrap();
        PriceBoard::from_response(&coins, currencies, &response, Utc::now())
    }

    #[test]
    fn test_render_header_and_rows() {
        let text = render(&board(&Currency::DEFAULT));
        let lines: Vec<&str> = text.lines().collect();

        let header = lines[1];
        let usd = header.find("USD").unwrap();
        let eur = header.find("EUR").unwrap();
        let gbp = header.find("GBP").unwrap();
        assert!(usd < eur && eur < gbp, "{header}");

        let bitcoin = text.find("Bitcoin").unwrap();
        let ethereum = text.find("Ethereum").unwrap();
        let unknown = text.find("Notacoin").unwrap();
        assert!(bitcoin < ethereum && ethereum < unknown);

        assert!(text.contains("67012.5"));
        assert!(text.contains("52900.4"));
        assert!(text.contains("3230.4"));
    }

    #[test]
    fn test_render_marks_missing_cells() {
        let text = render(&board(&Currency::DEFAULT));
        let ethereum_line = text.lines().find(|l| l.contains("Ethereum")).unwrap();
        let unknown_line = text.lines().find(|l| l.contains("Notacoin")).unwrap();

        assert_eq!(ethereum_line.matches(MISSING).count(), 1);
        assert_eq!(unknown_line.matches(MISSING).count(), 3);
    }

    #[test]
    fn test_render_only_selected_currencies() {
        let text = render(&board(&[Currency::Eur]));
        assert!(text.contains("EUR"));
        assert!(!text.contains("USD"));
        assert!(!text.contains("67012.5"));
        assert!(text.contains("61800"));
    }
}
