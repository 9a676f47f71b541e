//! Parsing of typed command lines.

use core::str::FromStr;

use fundraiser_core::{DomainError, ItemId};

/// One interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListItems,
    ListItemNames,
    ListMembers,
    ListMemberNames,
    /// Items sold by the given member id.
    ListMemberItems(String),
    ListTopSellers,
    SearchItems(String),
    SearchMembers(String),
    Sale {
        member_id: String,
        item_id: ItemId,
        quantity: u64,
    },
    Quit,
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();

        let command = match words.as_slice() {
            ["list", "items"] => Command::ListItems,
            ["list", "item", "names"] => Command::ListItemNames,
            ["list", "members"] => Command::ListMembers,
            ["list", "member", "names"] => Command::ListMemberNames,
            ["list", "member", id] => Command::ListMemberItems(id.to_string()),
            ["list", "topsellers"] => Command::ListTopSellers,
            ["search", "item", needle] => Command::SearchItems(needle.to_string()),
            ["search", "member", needle] => Command::SearchMembers(needle.to_string()),
            ["sale", member_id, item_id, quantity] => parse_sale(member_id, item_id, quantity)?,
            ["quit"] => Command::Quit,
            [] => return Err(DomainError::validation("empty command")),
            _ => {
                return Err(DomainError::validation(format!(
                    "unrecognized command: {}",
                    words.join(" ")
                )));
            }
        };

        Ok(command)
    }
}

fn parse_sale(member_id: &str, item_id: &str, quantity: &str) -> Result<Command, DomainError> {
    let item_id: ItemId = item_id.parse()?;
    let quantity: i64 = quantity
        .parse()
        .map_err(|_| DomainError::validation(format!("invalid quantity: {quantity:?}")))?;
    if quantity < 0 {
        return Err(DomainError::validation("quantity must not be negative"));
    }

    Ok(Command::Sale {
        member_id: member_id.to_string(),
        item_id,
        quantity: quantity as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, DomainError> {
        line.parse()
    }

    #[test]
    fn parses_list_commands() {
        assert_eq!(parse("list items"), Ok(Command::ListItems));
        assert_eq!(parse("list item names"), Ok(Command::ListItemNames));
        assert_eq!(parse("list members"), Ok(Command::ListMembers));
        assert_eq!(parse("list member names"), Ok(Command::ListMemberNames));
        assert_eq!(
            parse("list member m0001"),
            Ok(Command::ListMemberItems("m0001".to_string()))
        );
        assert_eq!(parse("  list   topsellers "), Ok(Command::ListTopSellers));
    }

    #[test]
    fn parses_search_and_quit() {
        assert_eq!(parse("search item pen"), Ok(Command::SearchItems("pen".to_string())));
        assert_eq!(
            parse("search member ADA"),
            Ok(Command::SearchMembers("ADA".to_string()))
        );
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn parses_sale() {
        assert_eq!(
            parse("sale m0001 12 3"),
            Ok(Command::Sale {
                member_id: "m0001".to_string(),
                item_id: ItemId(12),
                quantity: 3
            })
        );
        assert!(parse("sale m0001 12 0").is_ok());
    }

    #[test]
    fn rejects_negative_or_malformed_sales() {
        assert!(matches!(parse("sale m0001 12 -1"), Err(DomainError::Validation(_))));
        assert!(matches!(parse("sale m0001 12 many"), Err(DomainError::Validation(_))));
        assert!(matches!(parse("sale m0001 pen 1"), Err(DomainError::InvalidId(_))));
        assert!(parse("sale m0001 12").is_err());
    }

    #[test]
    fn rejects_unknown_shapes() {
        for line in ["", "list", "list item", "list things", "search item", "quit now", "sell m1 1 1"] {
            assert!(parse(line).is_err(), "{line:?} should be rejected");
        }
    }
}
