// Seed data for the listing page. The catalog is fixed for the process lifetime.

use chrono::NaiveDate;

use crate::modules::events::core::category::Category;
use crate::modules::events::core::event::Event;
use crate::shared::core::primitives::EventId;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: EventId,
    title: &str,
    date: NaiveDate,
    time: &str,
    location: &str,
    category: Category,
    attendees: u32,
    price: f64,
    description: &str,
    image_emoji: &str,
) -> Event {
    Event {
        id,
        title: title.into(),
        date,
        time: time.into(),
        location: location.into(),
        category,
        attendees,
        price,
        description: description.into(),
        image_emoji: image_emoji.into(),
    }
}

pub fn seed_catalog() -> Vec<Event> {
    vec![
        event(
            1,
            "Tech Conference 2025",
            const { ymd(2025, 12, 15) },
            "09:00 AM",
            "San Francisco, CA",
            Category::Conference,
            250,
            199.0,
            "Join industry leaders for the biggest tech conference of the year.",
            "💻",
        ),
        event(
            2,
            "Digital Marketing Workshop",
            const { ymd(2025, 12, 20) },
            "02:00 PM",
            "New York, NY",
            Category::Workshop,
            50,
            79.0,
            "Learn the latest digital marketing strategies from experts.",
            "📱",
        ),
        event(
            3,
            "Music Festival 2025",
            const { ymd(2025, 12, 28) },
            "06:00 PM",
            "Los Angeles, CA",
            Category::Festival,
            5000,
            150.0,
            "Experience live performances from top artists.",
            "🎵",
        ),
        event(
            4,
            "Startup Pitch Night",
            const { ymd(2025, 12, 10) },
            "07:00 PM",
            "Austin, TX",
            Category::Networking,
            100,
            25.0,
            "Watch innovative startups pitch their ideas to investors.",
            "🚀",
        ),
        event(
            5,
            "Photography Masterclass",
            const { ymd(2025, 12, 18) },
            "10:00 AM",
            "Seattle, WA",
            Category::Workshop,
            30,
            120.0,
            "Master photography techniques with professional photographers.",
            "📷",
        ),
        event(
            6,
            "Food & Wine Expo",
            const { ymd(2025, 12, 22) },
            "12:00 PM",
            "Chicago, IL",
            Category::Festival,
            800,
            45.0,
            "Taste exquisite foods and wines from around the world.",
            "🍷",
        ),
    ]
}
