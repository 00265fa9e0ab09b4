use chrono::NaiveDate;

/// Placeholder written into an order's Size or Color when the product has
/// only one option for that attribute.
pub const NOT_APPLICABLE: &str = "N/A";

pub const YES: &str = "Yes";
pub const NO: &str = "No";

/// Renders a product flag the way the Products sheet stores it.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { YES } else { NO }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub one_size: bool,
    pub one_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub product_id: &'static str,
    pub product_name: &'static str,
    pub size: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: &'static str,
    pub customer_name: &'static str,
    pub product_id: &'static str,
    pub product_name: &'static str,
    pub size: &'static str,
    pub color: &'static str,
    pub quantity: u32,
    pub order_date: NaiveDate,
    pub notes: &'static str,
}

/// Checks the order against the One Size / One Color convention: a set flag
/// means the matching field must hold [`NOT_APPLICABLE`].
///
/// The generator never calls this. Order rows are written by hand to already
/// follow the rule; this only states it.
pub fn conforms(order: &Order, product: &Product) -> bool {
    if order.product_id != product.id {
        return false;
    }
    let size_ok = !product.one_size || order.size == NOT_APPLICABLE;
    let color_ok = !product.one_color || order.color == NOT_APPLICABLE;
    size_ok && color_ok
}
