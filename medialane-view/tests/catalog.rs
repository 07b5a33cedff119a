#![allow(dead_code)]
use medialane_core::models::Asset;
use rstest::fixture;

// A mixed asset catalog: sparse fields, a text id, a malformed price,
// inconsistent casing and two records tied on price and likes.
pub const ASSETS: &str = r#"[
    {
        "id": 1, "name": "Sunset Over Lagos", "creator": "adaeze.stark",
        "category": "Art", "status": "listed",
        "price": {"amount": "0.8", "currency": "ETH"}, "likes": 120,
        "createdAt": "2024-02-10T09:00:00Z"
    },
    {
        "id": 2, "name": "Midnight Groove", "creator": "djkofi",
        "category": "Music", "status": "listed",
        "price": {"amount": "1.5", "currency": "ETH"}, "likes": 340,
        "createdAt": "2024-03-05T18:30:00Z"
    },
    {
        "id": 3, "name": "Patent #4471: Solar Ink", "creator": "Lumen Labs",
        "category": "Patents", "status": "sold",
        "price": {"amount": "12", "currency": "ETH"}, "likes": 15,
        "createdAt": "2023-11-20T00:00:00Z"
    },
    {
        "id": 4, "name": "Lagos Nights (Stem Pack)", "creator": "djkofi",
        "category": "music", "status": "Listed", "likes": 88,
        "createdAt": "2024-05-01T12:00:00Z"
    },
    {
        "id": 5, "name": "Glyph Series 01",
        "category": "Art", "status": "draft",
        "price": {"amount": "free", "currency": "ETH"}
    },
    {
        "id": 6, "name": "Orbit", "creator": "Nova", "status": "listed",
        "price": {"amount": "1.5", "currency": "ETH"}, "likes": 340,
        "createdAt": "2024-01-15T08:00:00Z"
    },
    {
        "id": "0xabc", "name": "Mask of Ife", "creator": "adaeze.stark",
        "category": "Art", "status": "listed",
        "price": {"amount": "3,000", "currency": "STRK"}, "likes": 7,
        "createdAt": "2024-04-18T16:45:00Z"
    }
]"#;

#[fixture]
pub fn assets() -> Vec<Asset> {
    serde_json::from_str(ASSETS).unwrap()
}

pub fn ids(view: &[&Asset]) -> Vec<String> {
    view.iter().map(|asset| asset.id.to_string()).collect()
}
