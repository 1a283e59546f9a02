use crate::models::{
    Category, Coordinates, GuestType, Listing, ListingOwner, Review, VisibilityStatus,
};

/// Built-in listing catalog for the Puttur / Malnad region.
///
/// These records are compiled in and implicitly approved; the order of
/// this vector is the default tiebreak order of discovery results.
pub fn built_in_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Balnad Heritage Co-Living".to_string(),
            location: "Balnad".to_string(),
            category: Category::Villa,
            allowed_guest: GuestType::Any,
            price: "₹8,500".to_string(),
            price_value: 8_500,
            rating: 4.8,
            main_image: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800"
                .to_string(),
            gallery_images: vec![
                "https://images.unsplash.com/photo-1598228723793-52759bba239c?w=800".to_string(),
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800".to_string(),
            ],
            description: "Heritage home turned co-living space amid areca plantations. \
                          Quiet rooms and shared work areas for remote workers."
                .to_string(),
            amenities: vec![
                "High-Speed Wi-Fi".to_string(),
                "Home Cooked Meals".to_string(),
                "Parking".to_string(),
                "Power Backup".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7750, lng: 75.2150 },
            status: VisibilityStatus::Approved,
            owner: Some(ListingOwner {
                name: "Shivaprasad K.".to_string(),
                contact: "+91 94481 00001".to_string(),
                email: "shivaprasad@malnadstays.in".to_string(),
                avatar: None,
            }),
            submitted_at: None,
        },
        Listing {
            id: "2".to_string(),
            title: "The Darbar Executive Suites".to_string(),
            location: "Darbar".to_string(),
            category: Category::Apartment,
            allowed_guest: GuestType::Any,
            price: "₹12,000".to_string(),
            price_value: 12_000,
            rating: 4.5,
            main_image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800"
                .to_string(),
            gallery_images: vec![
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800".to_string(),
            ],
            description: "Serviced apartments in the town centre, minutes from the bus \
                          stand. Cleaning and furnishings included."
                .to_string(),
            amenities: vec![
                "AC Rooms".to_string(),
                "High-Speed Wi-Fi".to_string(),
                "Room Service".to_string(),
                "Elevator".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7690, lng: 75.2030 },
            status: VisibilityStatus::Approved,
            owner: Some(ListingOwner {
                name: "Ramesh Shetty".to_string(),
                contact: "+91 94812 00002".to_string(),
                email: "ramesh.shetty@darbar.in".to_string(),
                avatar: None,
            }),
            submitted_at: None,
        },
        Listing {
            id: "3".to_string(),
            title: "Nehrunagar Student Haven".to_string(),
            location: "Nehrunagar".to_string(),
            category: Category::Pg,
            allowed_guest: GuestType::Male,
            price: "₹4,500".to_string(),
            price_value: 4_500,
            rating: 4.2,
            main_image: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?w=800"
                .to_string(),
            gallery_images: vec![],
            description: "PG within walking distance of St. Philomena College. Disciplined \
                          environment with mess food."
                .to_string(),
            amenities: vec![
                "Study Desk".to_string(),
                "High-Speed Wi-Fi".to_string(),
                "Mess Facility".to_string(),
                "24/7 Security".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7620, lng: 75.2100 },
            status: VisibilityStatus::Approved,
            owner: Some(ListingOwner {
                name: "Venkatesh Rao".to_string(),
                contact: "+91 98800 12345".to_string(),
                email: "venky.rao@gmail.com".to_string(),
                avatar: None,
            }),
            submitted_at: None,
        },
        Listing {
            id: "4".to_string(),
            title: "Kemminje Group Villa".to_string(),
            location: "Kemminje".to_string(),
            category: Category::Villa,
            allowed_guest: GuestType::Family,
            price: "₹18,000".to_string(),
            price_value: 18_000,
            rating: 4.9,
            main_image: "https://images.unsplash.com/photo-1600596542815-e495e913193d?w=800"
                .to_string(),
            gallery_images: vec![
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800".to_string(),
            ],
            description: "Spacious villa for a relocating family, with a garden and a \
                          kitchen for self-cooking, in a safe residential lane."
                .to_string(),
            amenities: vec![
                "Private Garden".to_string(),
                "Full Kitchen".to_string(),
                "Parking".to_string(),
                "Power Backup".to_string(),
                "Pet Friendly".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7550, lng: 75.2200 },
            status: VisibilityStatus::Approved,
            owner: Some(ListingOwner {
                name: "Leela Hegde".to_string(),
                contact: "+91 99001 55667".to_string(),
                email: "leela.hegde@outlook.com".to_string(),
                avatar: None,
            }),
            submitted_at: None,
        },
        Listing {
            id: "5".to_string(),
            title: "Kabaka Transit Hostel".to_string(),
            location: "Kabaka".to_string(),
            category: Category::Hostel,
            allowed_guest: GuestType::Any,
            price: "₹3,500".to_string(),
            price_value: 3_500,
            rating: 4.3,
            main_image: "https://images.unsplash.com/photo-1580587771525-78b9dba3b91d?w=800"
                .to_string(),
            gallery_images: vec![],
            description: "Budget dorms near the Kabaka junction, popular with short-stay \
                          workers passing through Puttur."
                .to_string(),
            amenities: vec![
                "24/7 Security".to_string(),
                "Parking".to_string(),
                "Washing Machine".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7810, lng: 75.1950 },
            status: VisibilityStatus::Approved,
            owner: None,
            submitted_at: None,
        },
        Listing {
            id: "6".to_string(),
            title: "Bannur Ladies PG".to_string(),
            location: "Bannur".to_string(),
            category: Category::Pg,
            allowed_guest: GuestType::Female,
            price: "₹5,200".to_string(),
            price_value: 5_200,
            rating: 4.6,
            main_image: "https://images.unsplash.com/photo-1595526114035-0d45ed16cfbf?w=800"
                .to_string(),
            gallery_images: vec![],
            description: "Ladies-only PG close to the hospital quarter, with home cooked \
                          meals and CCTV on every floor."
                .to_string(),
            amenities: vec![
                "Home Cooked Meals".to_string(),
                "24/7 Security".to_string(),
                "High-Speed Wi-Fi".to_string(),
                "Power Backup".to_string(),
            ],
            coordinates: Coordinates { lat: 12.7580, lng: 75.1980 },
            status: VisibilityStatus::Approved,
            owner: Some(ListingOwner {
                name: "Sharada Bhat".to_string(),
                contact: "+91 97405 33210".to_string(),
                email: "sharada.bhat@malnadstays.in".to_string(),
                avatar: None,
            }),
            submitted_at: None,
        },
        Listing {
            id: "7".to_string(),
            title: "Uppinangady River Cottage".to_string(),
            location: "Uppinangady".to_string(),
            category: Category::Cottage,
            allowed_guest: GuestType::Family,
            price: "₹9,800".to_string(),
            price_value: 9_800,
            rating: 4.4,
            main_image: "https://images.unsplash.com/photo-1587061949409-02df41d5e562?w=800"
                .to_string(),
            gallery_images: vec![],
            description: "Riverside cottage at the Netravati confluence, a short drive \
                          from town. Suits weekend family stays."
                .to_string(),
            amenities: vec![
                "Private Garden".to_string(),
                "Parking".to_string(),
                "Full Kitchen".to_string(),
            ],
            coordinates: Coordinates { lat: 12.8420, lng: 75.2550 },
            status: VisibilityStatus::Approved,
            owner: None,
            submitted_at: None,
        },
    ]
}

/// Built-in review catalog, keyed by listing id. Consumed by the
/// details view, not by the discovery engine.
pub fn built_in_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            listing_id: "1".to_string(),
            user_name: "Anirudh P.".to_string(),
            rating: 5.0,
            date: "2025-11-02".to_string(),
            comment: "Quietest place I have worked from. The meals alone are worth it."
                .to_string(),
        },
        Review {
            id: "r2".to_string(),
            listing_id: "1".to_string(),
            user_name: "Megha S.".to_string(),
            rating: 4.5,
            date: "2025-12-18".to_string(),
            comment: "Wi-Fi held up through the monsoon outages thanks to the backup."
                .to_string(),
        },
        Review {
            id: "r3".to_string(),
            listing_id: "3".to_string(),
            user_name: "Kiran D.".to_string(),
            rating: 4.0,
            date: "2026-01-09".to_string(),
            comment: "Five minute walk to college, mess food is simple but reliable."
                .to_string(),
        },
        Review {
            id: "r4".to_string(),
            listing_id: "4".to_string(),
            user_name: "The Kamaths".to_string(),
            rating: 5.0,
            date: "2026-02-22".to_string(),
            comment: "Garden kept the kids busy all weekend. Parking fits two cars easily."
                .to_string(),
        },
    ]
}

/// Reviews for a single listing, in catalog order.
pub fn reviews_for(listing_id: &str) -> Vec<Review> {
    built_in_reviews()
        .into_iter()
        .filter(|review| review.listing_id == listing_id)
        .collect()
}
