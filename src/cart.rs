//! Checkout cart and invoice history, persisted as a local JSON cache.
//!
//! The store is an explicit value: callers `load` it, mutate it, and `save`
//! it. Nothing in the catalog pipeline reads or writes it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartItemKind {
    Product,
    Tour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub kind: CartItemKind,
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A completed purchase kept in the local history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub code: Option<String>,
    pub issued_at: DateTime<Utc>,
    pub visitor: String,
    pub tariff: String,
    pub total: f64,
    pub items: Vec<CartLine>,
}

/// Admission price for one tariff over an optional validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffPrice {
    pub tariff: String,
    pub price: f64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Price of `tariff` at `now`: among the prices whose window contains `now`
/// (bounds inclusive, missing bounds open), the one that started most
/// recently. `0.0` when none applies.
pub fn active_tariff_price(prices: &[TariffPrice], tariff: &str, now: DateTime<Utc>) -> f64 {
    let wanted = tariff.trim().to_lowercase();
    prices
        .iter()
        .filter(|p| p.tariff.trim().to_lowercase() == wanted)
        .filter(|p| p.start.map_or(true, |s| s <= now))
        .filter(|p| p.end.map_or(true, |e| e >= now))
        // max_by_key keeps the last maximum; reverse so the first listed wins ties
        .rev()
        .max_by_key(|p| p.start.map_or(i64::MIN, |s| s.timestamp_millis()))
        .map_or(0.0, |p| p.price)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    #[serde(default)]
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub history: Vec<InvoiceRecord>,
}

impl CartStore {
    /// Reads the store from `path`. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no cart cache, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Adds a product, merging with an existing line for the same product.
    pub fn add_product(&mut self, id: i64, name: &str, unit_price: f64, quantity: u32) {
        self.add_line(CartItemKind::Product, id, name, unit_price, quantity, |line| {
            line.kind == CartItemKind::Product && line.id == id
        });
    }

    /// Adds a tour at the current tariff price. A line merges only when both
    /// the tour and the price match, so a tariff change opens a new line.
    pub fn add_tour(&mut self, id: i64, label: &str, unit_price: f64, quantity: u32) {
        self.add_line(CartItemKind::Tour, id, label, unit_price, quantity, |line| {
            line.kind == CartItemKind::Tour && line.id == id && line.unit_price == unit_price
        });
    }

    fn add_line(
        &mut self,
        kind: CartItemKind,
        id: i64,
        name: &str,
        unit_price: f64,
        quantity: u32,
        same_line: impl Fn(&CartLine) -> bool,
    ) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| same_line(line)) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                kind,
                id,
                name: name.to_string(),
                unit_price,
                quantity,
            }),
        }
    }

    /// Removes the line at `index`; out-of-range indexes are ignored.
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self, kind: CartItemKind) -> f64 {
        self.lines
            .iter()
            .filter(|line| line.kind == kind)
            .map(CartLine::line_total)
            .sum()
    }

    pub fn subtotal_all(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Estimated total: every line plus one admission at `tariff_price`.
    /// Taxes and discounts are applied server-side.
    pub fn total(&self, tariff_price: f64) -> f64 {
        self.subtotal_all() + tariff_price
    }

    /// `id|quantity` pairs joined by commas, as the registration endpoint
    /// expects. `None` when the cart holds no line of `kind`.
    pub fn encoded_lines(&self, kind: CartItemKind) -> Option<String> {
        let encoded: Vec<String> = self
            .lines
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| format!("{}|{}", line.id, line.quantity))
            .collect();
        if encoded.is_empty() {
            None
        } else {
            Some(encoded.join(","))
        }
    }

    /// Moves the cart into the history as a completed purchase, newest first.
    pub fn record_invoice(
        &mut self,
        code: Option<String>,
        visitor: &str,
        tariff: &str,
        tariff_price: f64,
        now: DateTime<Utc>,
    ) -> &InvoiceRecord {
        let invoice = InvoiceRecord {
            code,
            issued_at: now,
            visitor: visitor.to_string(),
            tariff: tariff.to_string(),
            total: self.total(tariff_price),
            items: std::mem::take(&mut self.lines),
        };
        self.history.insert(0, invoice);
        &self.history[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_products_merge_by_id() {
        let mut cart = CartStore::default();
        cart.add_product(1, "Catálogo", 250.0, 1);
        cart.add_product(1, "Catálogo", 250.0, 2);
        cart.add_product(2, "Postal", 20.0, 0);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.subtotal(CartItemKind::Product), 750.0);
    }

    #[test]
    fn test_tours_split_on_price_change() {
        let mut cart = CartStore::default();
        cart.add_tour(5, "Tour nocturno", 100.0, 1);
        cart.add_tour(5, "Tour nocturno", 100.0, 1);
        cart.add_tour(5, "Tour nocturno", 60.0, 1);

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.subtotal(CartItemKind::Tour), 260.0);
        assert_eq!(cart.encoded_lines(CartItemKind::Tour).as_deref(), Some("5|2,5|1"));
        assert_eq!(cart.encoded_lines(CartItemKind::Product), None);
    }

    #[test]
    fn test_remove_and_totals() {
        let mut cart = CartStore::default();
        cart.add_product(1, "Libro", 10.0, 2);
        cart.add_tour(2, "Tour", 30.0, 1);
        assert_eq!(cart.total(50.0), 100.0);

        assert!(cart.remove_line(9).is_none());
        assert_eq!(cart.remove_line(0).map(|l| l.id), Some(1));
        assert_eq!(cart.subtotal_all(), 30.0);
    }

    #[test]
    fn test_record_invoice_moves_cart_to_history() {
        let mut cart = CartStore::default();
        cart.add_product(1, "Libro", 10.0, 1);
        let invoice = cart.record_invoice(Some("F-001".to_string()), "Ana", "Adulto", 90.0, now());
        assert_eq!(invoice.total, 100.0);
        assert_eq!(invoice.items.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.history.len(), 1);
    }

    #[test]
    fn test_active_tariff_price_picks_latest_valid() {
        let prices = vec![
            TariffPrice { tariff: "Adulto".into(), price: 80.0, start: Some(now() - Duration::days(300)), end: None },
            TariffPrice { tariff: "adulto ".into(), price: 95.0, start: Some(now() - Duration::days(10)), end: None },
            TariffPrice { tariff: "Adulto".into(), price: 120.0, start: Some(now() + Duration::days(10)), end: None },
            TariffPrice { tariff: "Niño".into(), price: 40.0, start: None, end: None },
        ];
        assert_eq!(active_tariff_price(&prices, "Adulto", now()), 95.0);
        assert_eq!(active_tariff_price(&prices, "niño", now()), 40.0);
        assert_eq!(active_tariff_price(&prices, "Estudiante", now()), 0.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");

        assert_eq!(CartStore::load(&path).unwrap(), CartStore::default());

        let mut cart = CartStore::default();
        cart.add_tour(3, "Tour guiado", 75.5, 2);
        cart.save(&path).unwrap();

        let loaded = CartStore::load(&path).unwrap();
        assert_eq!(loaded, cart);
    }
}
