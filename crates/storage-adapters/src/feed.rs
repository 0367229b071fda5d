//! # Recipe feed parsing
//!
//! The store is seeded from a CSV feed whose header row names columns
//! one-to-one with the [`Recipe`] fields. Rows bind straight onto the domain
//! type through serde, so date columns go through the same fixed-format
//! codec as JSON request bodies.

use std::io::Read;

use domains::error::{AppError, Result};
use domains::models::Recipe;

/// Columns the feed header must carry, in feed order; the names match the
/// `Recipe` fields one-to-one.
const COLUMNS: [&str; 26] = [
    "id",
    "created_at",
    "uploaded_at",
    "box_type",
    "title",
    "slug",
    "short_title",
    "marketing_description",
    "calories_kcal",
    "protein_grams",
    "fat_grams",
    "carbs_grams",
    "bulletpoint1",
    "bulletpoint2",
    "bulletpoint3",
    "diet_type",
    "season",
    "base",
    "protein_source",
    "preparation_time_minutes",
    "shelf_life_days",
    "equipment_needed",
    "origin_country",
    "cuisine",
    "in_your_box",
    "reference",
];

/// Parses the whole feed, preserving input row order.
///
/// All-or-nothing: a header that does not name the recipe columns, or the
/// first malformed row, unconvertible numeric field, or non-conforming
/// timestamp fails the batch with the offending row's number (1-based,
/// counting the header) in the error.
pub fn parse_feed<R: Read>(reader: R) -> Result<Vec<Recipe>> {
    let mut feed = csv::Reader::from_reader(reader);
    let headers = feed
        .headers()
        .map_err(|err| AppError::Parse(format!("row 1: {err}")))?;
    if headers.iter().ne(COLUMNS) {
        return Err(AppError::Parse(format!(
            "unexpected feed header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }
    let mut recipes = Vec::new();
    for (index, row) in feed.deserialize::<Recipe>().enumerate() {
        let recipe =
            row.map_err(|err| AppError::Parse(format!("row {}: {err}", index + 2)))?;
        recipes.push(recipe);
    }
    tracing::debug!(count = recipes.len(), "parsed recipe feed");
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRecipeStore;
    use domains::models::Limiter;
    use domains::ports::RecipeStore;

    const FEED: &str = "\
id,created_at,uploaded_at,box_type,title,slug,short_title,marketing_description,calories_kcal,protein_grams,fat_grams,carbs_grams,bulletpoint1,bulletpoint2,bulletpoint3,diet_type,season,base,protein_source,preparation_time_minutes,shelf_life_days,equipment_needed,origin_country,cuisine,in_your_box,reference
1,30/06/2015 17:58:00,30/06/2015 17:58:00,vegetarian,test_title,test_slug,test_short_title,\"very long marketing description\",401,12,35,0,a,b,c,meat,all,noodles,beef,35,4,Appetite,Great Britain,asian,\"lots, of, stuff\",59
2,30/06/2015 17:58:00,30/06/2015 17:58:00,gourmet,Tamil Nadu Prawn Masala,tamil-nadu-prawn-masala,,\"Curry brimming with contrasting tastes from chilli powder and fennel seed\",524,12,22,0,Vibrant & Fresh,\"Warming, not spicy\",Curry From Scratch,fish,all,pasta,seafood,40,4,Appetite,Great Britain,italian,\"king prawns, basmati rice, onion, curry leaves\",58
3,30/06/2015 17:58:00,30/06/2015 17:58:00,vegetarian,Wild Boar Salami Ragu,wild-boar-salami-ragu,,\"Smoky pasta dish with earthy garlic and leek\",609,17,29,0,,,,meat,all,pasta,pork,35,4,Appetite,Great Britain,british,,1
4,30/06/2015 17:58:00,30/06/2015 17:58:00,gourmet,Portobello Mushrooms with Corn Polenta,portobello-mushrooms-with-corn-polenta,,\"Veggies with a slightly spicy kick\",508,28,20,0,,,,vegetarian,all,,cheese,50,4,None,Great Britain,british,,56
5,30/06/2015 17:58:00,30/06/2015 17:58:00,vegetarian,Fennel Crusted Pork,fennel-crusted-pork,,\"A classic roast with a twist\",511,11,62,0,A roast with a twist,Low fat & high protein,With roast potatoes,meat,all,beans/lentils,pork,45,4,Pestle & Mortar (optional),Great Britain,british,\"pork tenderloin, potatoes, butter beans\",55
6,01/07/2015 17:58:00,01/07/2015 17:58:00,gourmet,Pork Chilli,pork-chilli,,\"A lighter take on a British classic\",401,12,35,0,,,,meat,all,,pork,35,4,Appetite,Great Britain,asian,,60
7,02/07/2015 17:58:00,02/07/2015 17:58:00,vegetarian,Courgette Pasta Rags,courgette-pasta-rags,,\"Protein-packed chicken and mineral-rich kale\",524,12,22,0,,,,meat,all,,chicken,40,4,Appetite,Great Britain,british,,59
8,03/07/2015 17:58:00,03/07/2015 17:58:00,vegetarian,Homemade Eggs & Beans,homemade-eggs-beans,,\"Golden breaded escalopes with garlic butter\",609,17,29,0,,,,meat,all,,eggs,35,3,Appetite,Great Britain,italian,,2
9,04/07/2015 17:58:00,04/07/2015 17:58:00,gourmet,Grilled Jerusalem Fish,grilled-jerusalem-fish,,\"Zingy ginger with a kick of chilli\",508,28,20,0,,,,meat,all,,fish,50,4,Appetite,Great Britain,mediterranean,,57
10,05/07/2015 17:58:00,05/07/2015 17:58:00,gourmet,Pork Katsu Curry,pork-katsu-curry,,\"Warm and tasty with a hint of Scandi influence\",511,11,62,0,,,,meat,all,,pork,45,4,Appetite,Great Britain,mexican,,56
";

    #[test]
    fn parses_a_valid_feed_in_row_order() {
        let recipes = parse_feed(FEED.as_bytes()).unwrap();
        assert_eq!(recipes.len(), 10);
        assert_eq!(
            recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );

        let first = &recipes[0];
        assert_eq!(first.box_type, "vegetarian");
        assert_eq!(first.title, "test_title");
        assert_eq!(first.slug, "test_slug");
        assert_eq!(first.short_title, "test_short_title");
        assert_eq!(first.marketing_description, "very long marketing description");
        assert_eq!(first.calories_kcal, 401);
        assert_eq!(first.protein_grams, 12);
        assert_eq!(first.fat_grams, 35);
        assert_eq!(first.carbs_grams, 0);
        assert_eq!(first.bulletpoint1, "a");
        assert_eq!(first.diet_type, "meat");
        assert_eq!(first.season, "all");
        assert_eq!(first.base, "noodles");
        assert_eq!(first.protein_source, "beef");
        assert_eq!(first.preparation_time_minutes, 35);
        assert_eq!(first.shelf_life_days, 4);
        assert_eq!(first.equipment_needed, "Appetite");
        assert_eq!(first.origin_country, "Great Britain");
        assert_eq!(first.cuisine, "asian");
        assert_eq!(first.in_your_box, "lots, of, stuff");
        assert_eq!(first.reference, 59);
        assert_eq!(
            first.created_at,
            domains::date::parse("30/06/2015 17:58:00").unwrap()
        );
        assert_eq!(first.average_rate, 0.0);
    }

    #[test]
    fn rejects_structural_garbage() {
        let err = parse_feed(r#"this, is crap, '""""""""""'"#.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn fails_the_whole_batch_on_a_bad_timestamp() {
        let feed = FEED.replace("05/07/2015 17:58:00", "2015-07-05T17:58:00Z");
        let err = parse_feed(feed.as_bytes()).unwrap_err();
        match err {
            AppError::Parse(message) => assert!(message.contains("row 11"), "{message}"),
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn fails_the_whole_batch_on_a_bad_numeric_field() {
        let feed = FEED.replace(",401,", ",four-oh-one,");
        assert!(matches!(parse_feed(feed.as_bytes()), Err(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn feed_round_trips_through_the_store() {
        let store = MemoryRecipeStore::new();
        let loaded = store.bulk_load(parse_feed(FEED.as_bytes()).unwrap()).await;
        assert_eq!(loaded, 10);

        let page = store.fetch_page(Limiter { limit: 2, page: 1 }).await;
        assert_eq!(page.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);

        let everything = store.fetch_page(Limiter::default()).await;
        assert_eq!(everything.len(), 10);
    }
}
