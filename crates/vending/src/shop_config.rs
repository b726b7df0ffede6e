//! Shop configuration rendering.
//!
//! The bot reads its shop from a plain-text file: shop name, one empty
//! line, then one `name<TAB>price<TAB>count` line per entry. The layout is
//! a compatibility contract with the bot and must be byte-for-byte
//! reproducible for the same offer.

use crate::offer::Offer;

/// Render an offer into the bot's shop configuration format.
///
/// Prices are plain integer digits with no grouping, so the output decodes
/// back to the same integers.
pub fn render(shop_name: &str, offer: &Offer) -> String {
    let mut out = String::with_capacity(shop_name.len() + 2 + offer.entries().len() * 24);
    out.push_str(shop_name);
    out.push_str("\n\n");

    for entry in offer.entries() {
        out.push_str(entry.name());
        out.push('\t');
        out.push_str(&entry.price().to_string());
        out.push('\t');
        out.push_str(&entry.count().to_string());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::ShopEntry;

    #[test]
    fn renders_the_exact_layout() {
        let offer = Offer::new(vec![ShopEntry::new("Potion", 50, 3).unwrap()]);
        assert_eq!(render("MyShop", &offer), "MyShop\n\nPotion\t50\t3\n");
    }

    #[test]
    fn renders_entries_in_offer_order() {
        let offer = Offer::new(vec![
            ShopEntry::new("Red Potion", 47, 10).unwrap(),
            ShopEntry::new("Witch Starsand", 180_000, 2).unwrap(),
        ]);
        assert_eq!(
            render("Cheap Stuff", &offer),
            "Cheap Stuff\n\nRed Potion\t47\t10\nWitch Starsand\t180000\t2\n"
        );
    }

    #[test]
    fn empty_offer_renders_just_the_header() {
        let offer = Offer::new(Vec::new());
        assert_eq!(render("MyShop", &offer), "MyShop\n\n");
    }

    #[test]
    fn price_and_count_tokens_round_trip() {
        let offer = Offer::new(vec![ShopEntry::new("Potion", 50, 3).unwrap()]);
        let rendered = render("MyShop", &offer);

        let entry_line = rendered.lines().nth(2).unwrap();
        let mut fields = entry_line.split('\t');
        assert_eq!(fields.next(), Some("Potion"));
        assert_eq!(fields.next().unwrap().parse::<u64>().unwrap(), 50);
        assert_eq!(fields.next().unwrap().parse::<i64>().unwrap(), 3);
    }

    #[test]
    fn rendering_is_reproducible() {
        let offer = Offer::new(vec![ShopEntry::new("Jellopy", 7, 999).unwrap()]);
        assert_eq!(render("Shop", &offer), render("Shop", &offer));
    }
}
