//! Static lookup tables for category and color normalization.
//!
//! Category tables are scanned front to back and the first keyword that is a
//! substring of the input wins. Keywords overlap (`"bra"` sits inside
//! `"sports-bra"`, `"top"` inside `"tops"` and `"bikini-top"`), so entry
//! order is part of the classification rules and must not be re-sorted.

use retailscope_core::MainCategory;

use MainCategory::{
    Accessories, BodysuitsCorsetry, Bottoms, Bras, Hosiery, LingerieSets, Nightwear, Shapewear,
    SportsBras, Swimwear, Tops, Underwear,
};

/// Keyword → main category, in match-priority order.
pub static MAIN_CATEGORY_KEYWORDS: &[(&str, MainCategory)] = &[
    // Bras
    ("bh", Bras),
    ("bra", Bras),
    ("buegel", Bras),
    ("underwired", Bras),
    ("triangle", Bras),
    ("soft", Bras),
    ("push", Bras),
    ("t-shirt", Bras),
    ("balcony", Bras),
    ("balconette", Bras),
    ("strapless", Bras),
    ("plunge", Bras),
    ("wireless", Bras),
    ("bralette", Bras),
    ("minimizer", Bras),
    ("maternity", Bras),
    ("multiway", Bras),
    ("bustier", Bras),
    // Underwear
    ("briefs", Underwear),
    ("brief", Underwear),
    ("panties", Underwear),
    ("panty", Underwear),
    ("period-panties", Underwear),
    ("g-string", Underwear),
    ("slip", Underwear),
    ("thong", Underwear),
    ("tanga", Underwear),
    ("hipster", Underwear),
    ("brazilian", Underwear),
    ("string", Underwear),
    ("boxer", Underwear),
    ("shorts", Underwear),
    ("boyshort", Underwear),
    // Bodysuits & corsetry
    ("body", BodysuitsCorsetry),
    ("bodysuit", BodysuitsCorsetry),
    ("bodies", BodysuitsCorsetry),
    ("corset", BodysuitsCorsetry),
    // Shapewear
    ("shapewear", Shapewear),
    ("girdle", Shapewear),
    // Sets
    ("lingerie-set", LingerieSets),
    ("set", LingerieSets),
    // Nightwear
    ("pyjama", Nightwear),
    ("pajama", Nightwear),
    ("nightdress", Nightwear),
    ("nightwear", Nightwear),
    ("babydoll", Nightwear),
    ("chemise", Nightwear),
    ("robe", Nightwear),
    // Tops
    ("tank", Tops),
    ("top", Tops),
    ("sweater", Tops),
    ("undershirt", Tops),
    ("camisole", Tops),
    // Hosiery
    ("tights", Hosiery),
    ("stockings", Hosiery),
    ("hold-ups", Hosiery),
    ("socks", Hosiery),
    ("leggings", Hosiery),
    // Swimwear
    ("bikini", Swimwear),
    ("swimsuit", Swimwear),
    ("tankini", Swimwear),
    // Sports
    ("sports-bra", SportsBras),
    // Accessories
    ("suspenders", Accessories),
    ("garter", Accessories),
    ("pasties", Accessories),
    // Bottoms
    ("jean", Bottoms),
    // Full retailer category slugs
    ("womens-clothing-lingerie-bodies", BodysuitsCorsetry),
    ("women-clothing-underwear-undershirts", Tops),
    ("women-clothing-underwear-suspenders", Accessories),
    ("women-clothing-underwear-corset", BodysuitsCorsetry),
];

/// Keyword → specific category label, in match-priority order.
pub static SPECIFIC_CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    // Bras
    ("balconette", "Balconette Bra"),
    ("balconette-bra", "Balconette Bra"),
    ("plunge", "Plunge Bra"),
    ("plunge-bra", "Plunge Bra"),
    ("push", "Push-up Bra"),
    ("push-up", "Push-up Bra"),
    ("push-up-bra", "Push-up Bra"),
    ("triangle", "Triangle Bra"),
    ("triangle-bra", "Triangle Bra"),
    ("wireless", "Wireless Bra"),
    ("wireless-bra", "Wireless Bra"),
    ("bustier", "Bustier"),
    ("bustier-bra", "Bustier"),
    ("t-shirt-bra", "T-shirt Bra"),
    ("strapless", "Strapless Bra"),
    ("strapless-bra", "Strapless Bra"),
    ("soft-bra", "Soft Bra"),
    ("underwired-bra", "Underwired Bra"),
    ("sports-bra", "Sports Bra"),
    ("minimizer-bra", "Minimizer Bra"),
    ("bralette", "Bralette"),
    ("longline-bra", "Longline Bra"),
    ("maternity-bra", "Maternity Bra"),
    ("nursing-bra", "Nursing Bra"),
    ("multiway-bra", "Multiway Bra"),
    ("front-closure-bra", "Front Closure Bra"),
    ("convertible-bra", "Convertible Bra"),
    ("full-cup-bra", "Full Cup Bra"),
    ("demi-bra", "Demi Bra"),
    ("shelf-bra", "Shelf Bra"),
    ("side-support-bra", "Side Support Bra"),
    // Underwear
    ("brief", "Brief"),
    ("briefs", "Brief"),
    ("panty", "Brief"),
    ("panties", "Brief"),
    ("tanga", "Tanga"),
    ("hipster", "Hipster"),
    ("brazilian", "Brazilian"),
    ("string", "G-String"),
    ("g-string", "G-String"),
    ("g-strings", "G-String"),
    ("thong", "Thong"),
    ("slip", "Slip"),
    ("boxer", "Boxer"),
    ("boxers", "Boxer"),
    ("shorts", "Shorts"),
    ("boyshort", "Shorts"),
    ("boyshorts", "Shorts"),
    ("period-panties", "Period Panties"),
    // Shapewear and corsetry
    ("shapewear", "Shapewear"),
    ("body", "Body"),
    ("bodies", "Body"),
    ("corset", "Corset"),
    ("girdle", "Corset"),
    ("waist-cincher", "Corset"),
    // Sets
    ("lingerie-set", "Lingerie Set"),
    ("lingerie-sets", "Lingerie Set"),
    ("set", "Lingerie Set"),
    // Tops
    ("tank", "Tank Top"),
    ("tank-top", "Tank Top"),
    ("top", "Top"),
    ("tops", "Top"),
    ("sweater", "Sweater"),
    ("undershirt", "Undershirt"),
    ("undershirts", "Undershirt"),
    ("camisole", "Camisole"),
    ("crop-top", "Crop Top"),
    // Nightwear
    ("pyjama", "Pyjama"),
    ("pyjamas", "Pyjama"),
    ("pajama", "Pyjama"),
    ("pajamas", "Pyjama"),
    ("nightdress", "Nightdress"),
    ("nightgown", "Nightdress"),
    ("nightshirt", "Nightdress"),
    ("nightwear", "Nightdress"),
    ("babydoll", "Babydoll"),
    ("chemise", "Chemise"),
    ("robe", "Robe"),
    ("dressing-gown", "Robe"),
    // Hosiery
    ("tights", "Tights"),
    ("stockings", "Stockings"),
    ("hold-ups", "Hold-Ups"),
    ("socks", "Socks"),
    ("knee-highs", "Socks"),
    ("leggings", "Leggings"),
    // Swimwear
    ("bikini", "Bikini"),
    ("bikini-top", "Bikini Top"),
    ("bikini-bottom", "Bikini Bottom"),
    ("swimsuit", "Swimsuit"),
    ("one-piece", "Swimsuit"),
    ("tankini", "Tankini"),
    // Accessories
    ("suspenders", "Suspenders"),
    ("garter", "Garter"),
    ("garter-belt", "Garter"),
    ("pasties", "Pasties"),
    ("accessories", "Accessories"),
];

/// Category indicators too broad to classify on. A listing whose category
/// source is one of these is classified from its name instead.
pub static GENERIC_CATEGORY_PLACEHOLDERS: &[&str] = &[
    "womens-clothing-underwear",
    "womens clothing underwear",
    "lingerie",
    "underwear",
];

/// Canonical bucket for listings carrying more than one distinct color.
pub const MULTICOLOR: &str = "Multicolor";

/// Lowercased color token (German, English, retail jargon) → canonical color.
pub static COLOR_TOKENS: &[(&str, &str)] = &[
    ("schwarz", "Black"),
    ("black", "Black"),
    ("noir", "Black"),
    ("jet", "Black"),
    ("weiß", "White"),
    ("weiss", "White"),
    ("white", "White"),
    ("offwhite", "White"),
    ("off-white", "White"),
    ("ecru", "White"),
    ("ivory", "White"),
    ("blau", "Blue"),
    ("navy", "Blue"),
    ("blue", "Blue"),
    ("dunkelblau", "Blue"),
    ("hellblau", "Blue"),
    ("denim", "Blue"),
    ("azur", "Blue"),
    ("marine", "Blue"),
    ("rot", "Red"),
    ("red", "Red"),
    ("bordeaux", "Red"),
    ("burgunder", "Red"),
    ("weinrot", "Red"),
    ("karminrot", "Red"),
    ("rosa", "Pink"),
    ("pink", "Pink"),
    ("altrosa", "Pink"),
    ("fuchsia", "Pink"),
    ("magenta", "Pink"),
    ("rosé", "Pink"),
    ("beige", "Beige"),
    ("sand", "Beige"),
    ("stone", "Beige"),
    ("camel", "Beige"),
    ("champagner", "Beige"),
    ("braun", "Brown"),
    ("brown", "Brown"),
    ("kastanie", "Brown"),
    ("espresso", "Brown"),
    ("mokka", "Brown"),
    ("chocolate", "Brown"),
    ("grün", "Green"),
    ("green", "Green"),
    ("oliv", "Green"),
    ("olive", "Green"),
    ("mint", "Green"),
    ("türkis", "Green"),
    ("turquoise", "Green"),
    ("smaragd", "Green"),
    ("khaki", "Khaki"),
    ("gelb", "Yellow"),
    ("yellow", "Yellow"),
    ("gold", "Yellow"),
    ("senf", "Yellow"),
    ("lemon", "Yellow"),
    ("lila", "Purple"),
    ("purple", "Purple"),
    ("violett", "Purple"),
    ("aubergine", "Purple"),
    ("mauve", "Purple"),
    ("lavendel", "Purple"),
    ("grau", "Grey"),
    ("gray", "Grey"),
    ("grey", "Grey"),
    ("anthrazit", "Grey"),
    ("silber", "Grey"),
    ("silver", "Grey"),
    ("platin", "Grey"),
    ("orange", "Orange"),
    ("koralle", "Orange"),
    ("coral", "Orange"),
    ("apricot", "Orange"),
    ("aprikose", "Orange"),
    ("multi", MULTICOLOR),
    ("mehrfarbig", MULTICOLOR),
    ("multicolor", MULTICOLOR),
    ("bunt", MULTICOLOR),
    ("print", MULTICOLOR),
    ("gemustert", MULTICOLOR),
    ("creme", "Cream"),
    ("cream", "Cream"),
    ("milch", "Cream"),
    ("peach", "Peach"),
    ("pfirsich", "Peach"),
    ("taupe", "Taupe"),
    ("petrol", "Petrol"),
    ("powder", "Powder"),
    ("puder", "Powder"),
    ("crystal", "Crystal"),
    ("kristall", "Crystal"),
    ("smoke", "Grey"),
    ("rauch", "Grey"),
    ("mintgrün", "Green"),
    ("pastellgrün", "Green"),
    ("pastellblau", "Blue"),
    ("pastellrosa", "Pink"),
    ("pastellgelb", "Yellow"),
    ("pastelllila", "Purple"),
];

/// Canonical color for an exact, already-lowercased token.
#[must_use]
pub fn lookup_color(token: &str) -> Option<&'static str> {
    COLOR_TOKENS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn color_tokens_have_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in COLOR_TOKENS {
            assert!(seen.insert(*key), "duplicate color token {key}");
        }
    }

    #[test]
    fn color_tokens_are_lowercase() {
        for (key, _) in COLOR_TOKENS {
            assert_eq!(*key, key.to_lowercase(), "token {key} must be lowercase");
        }
    }

    #[test]
    fn category_keywords_are_lowercase() {
        for (key, _) in MAIN_CATEGORY_KEYWORDS {
            assert_eq!(*key, key.to_lowercase());
        }
        for (key, _) in SPECIFIC_CATEGORY_KEYWORDS {
            assert_eq!(*key, key.to_lowercase());
        }
    }

    #[test]
    fn bra_keyword_precedes_sports_bra() {
        let pos = |needle: &str| {
            MAIN_CATEGORY_KEYWORDS
                .iter()
                .position(|(k, _)| *k == needle)
                .unwrap()
        };
        assert!(pos("bra") < pos("sports-bra"));
    }

    #[test]
    fn lookup_color_hits_german_and_english() {
        assert_eq!(lookup_color("schwarz"), Some("Black"));
        assert_eq!(lookup_color("navy"), Some("Blue"));
        assert_eq!(lookup_color("champagner"), Some("Beige"));
        assert_eq!(lookup_color("weiß"), Some("White"));
    }

    #[test]
    fn lookup_color_misses_unknown_token() {
        assert!(lookup_color("vantablack").is_none());
    }
}
