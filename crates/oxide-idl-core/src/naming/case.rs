//! Identifier case conversion.

/// Converts an identifier to `lower_snake_case`.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase
/// letter, and the last capital of an acronym followed by a lowercase letter
/// (`HTTPRequest` becomes `http_request`). `-`, whitespace and repeated `_`
/// collapse into a single `_`.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary && !out.ends_with('_') {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Converts an identifier to `UPPER_SNAKE_CASE`.
#[must_use]
pub fn to_upper_snake_case(name: &str) -> String {
    to_snake_case(name)
        .chars()
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Order"), "order");
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_snake_case("orderItem"), "order_item");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("Order2Item"), "order2_item");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Sales-Order  Line"), "sales_order_line");
        assert_eq!(to_snake_case("Order__Item"), "order_item");
        assert_eq!(to_snake_case("SalesOrder_seq"), "sales_order_seq");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(to_upper_snake_case("OrderItem"), "ORDER_ITEM");
        assert_eq!(to_upper_snake_case("order_item_seq"), "ORDER_ITEM_SEQ");
    }
}
