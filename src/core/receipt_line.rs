use crate::domain::model::{LineItem, Price, Receipt};
use crate::utils::error::{ReceiptError, Result};

pub const ITEM_SEPARATOR: &str = ", ";

/// Formats a receipt as `"{id} {name} {price} {qty}, {name} {price} {qty}"`,
/// without a trailing newline.
pub fn format_receipt_line(receipt: &Receipt) -> String {
    let items: Vec<String> = receipt
        .items
        .iter()
        .map(|item| format!("{} {} {}", item.name, item.price, item.quantity))
        .collect();

    format!("{} {}", receipt.id, items.join(ITEM_SEPARATOR))
}

pub fn parse_receipt_line(line: &str) -> Result<Receipt> {
    let trimmed = line.trim_end_matches(['\n', '\r']);

    let (id_part, items_part) = trimmed
        .split_once(' ')
        .ok_or_else(|| ReceiptError::parse(trimmed, "expected '<id> <items>'"))?;

    let id = id_part
        .parse::<u32>()
        .map_err(|e| ReceiptError::parse(trimmed, format!("invalid receipt id '{}': {}", id_part, e)))?;
    if id == 0 {
        return Err(ReceiptError::parse(trimmed, "receipt ids start at 1"));
    }

    if items_part.is_empty() {
        return Err(ReceiptError::parse(trimmed, "receipt has no line items"));
    }

    let items = items_part
        .split(ITEM_SEPARATOR)
        .map(|group| parse_item(trimmed, group))
        .collect::<Result<Vec<_>>>()?;

    Ok(Receipt { id, items })
}

// Split from the right so a name containing spaces stays intact.
fn parse_item(line: &str, group: &str) -> Result<LineItem> {
    let mut fields = group.rsplitn(3, ' ');
    let (Some(quantity), Some(price), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ReceiptError::parse(
            line,
            format!("item '{}' is not '<name> <price> <quantity>'", group),
        ));
    };

    if name.is_empty() {
        return Err(ReceiptError::parse(line, format!("item '{}' has no name", group)));
    }

    let price = price
        .parse::<Price>()
        .map_err(|e| ReceiptError::parse(line, format!("invalid price '{}': {}", price, e)))?;
    if !price.value().is_finite() || price.value() <= 0.0 {
        return Err(ReceiptError::parse(
            line,
            format!("price '{}' is not a positive number", price),
        ));
    }
    let quantity = quantity
        .parse::<u32>()
        .map_err(|e| ReceiptError::parse(line, format!("invalid quantity '{}': {}", quantity, e)))?;
    if quantity == 0 {
        return Err(ReceiptError::parse(line, "quantity must be at least 1"));
    }

    Ok(LineItem {
        name: name.to_string(),
        price,
        quantity,
    })
}
