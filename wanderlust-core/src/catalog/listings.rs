//! Built-in accommodations, experiences and testimonials.

use crate::domain::{Accommodation, Experience, Testimonial};

#[allow(clippy::too_many_arguments)]
fn stay(
    id: &str,
    destination_id: &str,
    name: &str,
    location: &str,
    description: &str,
    image_url: &str,
    kind: &str,
    price_per_night: u32,
    rating: f32,
    review_count: u32,
    amenities: &[&str],
) -> Accommodation {
    Accommodation {
        id: id.into(),
        destination_id: destination_id.into(),
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        kind: kind.to_string(),
        price_per_night,
        rating,
        review_count,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn experience(
    id: &str,
    destination_id: &str,
    title: &str,
    description: &str,
    image_url: &str,
    category: &str,
    price: u32,
    duration: &str,
    rating: f32,
    review_count: u32,
) -> Experience {
    Experience {
        id: id.into(),
        destination_id: destination_id.into(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        price,
        duration: duration.to_string(),
        rating,
        review_count,
    }
}

pub fn accommodations() -> Vec<Accommodation> {
    vec![
        stay(
            "acc1",
            "bali",
            "Ubud Jungle Villa",
            "Ubud, Bali",
            "Private pool villa overlooking the Ayung River valley, a short ride from central Ubud.",
            "https://images.pexels.com/photos/2034335/pexels-photo-2034335.jpeg",
            "Villa",
            280,
            4.9,
            312,
            &["Private pool", "Free WiFi", "Breakfast included", "Airport shuttle"],
        ),
        stay(
            "acc2",
            "bali",
            "Seminyak Surf Hostel",
            "Seminyak, Bali",
            "Social hostel two blocks from the beach with a rooftop bar and surfboard rental.",
            "https://images.pexels.com/photos/271618/pexels-photo-271618.jpeg",
            "Hostel",
            25,
            4.4,
            845,
            &["Free WiFi", "Shared kitchen", "Surfboard rental"],
        ),
        stay(
            "acc3",
            "paris",
            "Hôtel Le Marais",
            "Le Marais, Paris",
            "Boutique hotel in a restored 17th-century townhouse near Place des Vosges.",
            "https://images.pexels.com/photos/164595/pexels-photo-164595.jpeg",
            "Hotel",
            320,
            4.7,
            528,
            &["Free WiFi", "Air conditioning", "Concierge", "Bar"],
        ),
        stay(
            "acc4",
            "paris",
            "Montmartre Artist Apartment",
            "Montmartre, Paris",
            "Bright top-floor apartment with views of Sacré-Cœur and a fully equipped kitchen.",
            "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg",
            "Apartment",
            165,
            4.6,
            201,
            &["Kitchen", "Free WiFi", "Washer"],
        ),
        stay(
            "acc5",
            "kyoto",
            "Gion Machiya Guesthouse",
            "Gion, Kyoto",
            "Traditional wooden townhouse with tatami rooms and a small inner garden.",
            "https://images.pexels.com/photos/2506988/pexels-photo-2506988.jpeg",
            "Guesthouse",
            140,
            4.8,
            389,
            &["Free WiFi", "Tea ceremony", "Garden"],
        ),
        stay(
            "acc6",
            "santorini",
            "Oia Caldera Suites",
            "Oia, Santorini",
            "Cave suites carved into the cliffside with plunge pools facing the caldera sunset.",
            "https://images.pexels.com/photos/1285625/pexels-photo-1285625.jpeg",
            "Resort",
            650,
            4.9,
            274,
            &["Plunge pool", "Breakfast included", "Spa", "Airport shuttle"],
        ),
        stay(
            "acc7",
            "newyork",
            "Midtown Skyline Hotel",
            "Midtown Manhattan, New York City",
            "Modern high-rise hotel steps from Times Square and the Broadway theaters.",
            "https://images.pexels.com/photos/258154/pexels-photo-258154.jpeg",
            "Hotel",
            420,
            4.5,
            1203,
            &["Free WiFi", "Fitness center", "Restaurant", "Concierge"],
        ),
        stay(
            "acc8",
            "capetown",
            "Camps Bay Beach Villa",
            "Camps Bay, Cape Town",
            "Four-bedroom villa with ocean views under the Twelve Apostles mountain range.",
            "https://images.pexels.com/photos/1396132/pexels-photo-1396132.jpeg",
            "Villa",
            390,
            4.8,
            96,
            &["Private pool", "Kitchen", "Parking", "Ocean view"],
        ),
        stay(
            "acc9",
            "barcelona",
            "Gothic Quarter Apartments",
            "Gothic Quarter, Barcelona",
            "Renovated apartments on a quiet lane minutes from La Rambla and the cathedral.",
            "https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg",
            "Apartment",
            135,
            4.5,
            412,
            &["Kitchen", "Free WiFi", "Air conditioning"],
        ),
        stay(
            "acc10",
            "tokyo",
            "Shinjuku Capsule Hostel",
            "Shinjuku, Tokyo",
            "Compact pod hostel next to Shinjuku Station with a public bath and lounge.",
            "https://images.pexels.com/photos/6585757/pexels-photo-6585757.jpeg",
            "Hostel",
            45,
            4.3,
            1587,
            &["Free WiFi", "Public bath", "Lockers"],
        ),
        stay(
            "acc11",
            "bangkok",
            "Riverside Grand Resort",
            "Chao Phraya River, Bangkok",
            "Riverfront resort with an infinity pool and free shuttle boats to the Grand Palace.",
            "https://images.pexels.com/photos/189296/pexels-photo-189296.jpeg",
            "Resort",
            190,
            4.7,
            936,
            &["Infinity pool", "Spa", "Shuttle boat", "Breakfast included"],
        ),
        stay(
            "acc12",
            "rome",
            "Trastevere Family Guesthouse",
            "Trastevere, Rome",
            "Family-run guesthouse above a trattoria in Rome's most charming neighborhood.",
            "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
            "Guesthouse",
            110,
            4.6,
            357,
            &["Breakfast included", "Free WiFi", "Terrace"],
        ),
        stay(
            "acc13",
            "rio",
            "Copacabana Palace View",
            "Copacabana, Rio de Janeiro",
            "Beachfront hotel on Avenida Atlântica with a rooftop pool overlooking the bay.",
            "https://images.pexels.com/photos/261102/pexels-photo-261102.jpeg",
            "Hotel",
            210,
            4.4,
            688,
            &["Rooftop pool", "Free WiFi", "Beach service"],
        ),
        stay(
            "acc14",
            "sydney",
            "Bondi Beach Apartment",
            "Bondi, Sydney",
            "Airy apartment one street back from Bondi Beach and the coastal walk.",
            "https://images.pexels.com/photos/1743227/pexels-photo-1743227.jpeg",
            "Apartment",
            1200,
            4.7,
            143,
            &["Kitchen", "Balcony", "Free WiFi", "Parking"],
        ),
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        experience(
            "exp1",
            "bali",
            "Tegallalang Rice Terraces and Ubud Tour",
            "Explore the iconic Tegallalang Rice Terraces and visit the cultural heart of Bali in \
             Ubud, including a trip to the Sacred Monkey Forest Sanctuary.",
            "https://images.pexels.com/photos/7161954/pexels-photo-7161954.jpeg",
            "Cultural",
            45,
            "8 hours",
            4.8,
            234,
        ),
        experience(
            "exp2",
            "paris",
            "Skip-the-Line Louvre Museum Tour",
            "Beat the crowds with a skip-the-line guided tour of the world-famous Louvre Museum, \
             home to thousands of works of art including the Mona Lisa and Venus de Milo.",
            "https://images.pexels.com/photos/3214742/pexels-photo-3214742.jpeg",
            "Cultural",
            65,
            "3 hours",
            4.7,
            548,
        ),
        experience(
            "exp3",
            "kyoto",
            "Arashiyama Bamboo Grove and Temple Tour",
            "Wander through the enchanting Arashiyama Bamboo Grove and visit important historic \
             temples including Tenryu-ji with its beautiful Zen garden.",
            "https://images.pexels.com/photos/402028/pexels-photo-402028.jpeg",
            "Cultural",
            55,
            "4 hours",
            4.9,
            187,
        ),
        experience(
            "exp4",
            "santorini",
            "Sunset Catamaran Cruise with Meal and Drinks",
            "Sail around Santorini on a luxury catamaran, enjoying stops for swimming and \
             snorkeling before watching the famous sunset with a Greek meal and unlimited drinks.",
            "https://images.pexels.com/photos/3601425/pexels-photo-3601425.jpeg",
            "Adventure",
            140,
            "5 hours",
            4.9,
            452,
        ),
        experience(
            "exp5",
            "newyork",
            "Broadway Show Experience with Backstage Tour",
            "Experience the magic of Broadway with premium tickets to a top show, followed by an \
             exclusive backstage tour to meet the cast and see behind the scenes.",
            "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg",
            "Entertainment",
            195,
            "4 hours",
            4.8,
            324,
        ),
        experience(
            "exp6",
            "capetown",
            "Table Mountain Cable Car and City Tour",
            "Ride the cable car to the top of Table Mountain for panoramic views, then explore \
             Cape Town's highlights including Bo-Kaap, V&A Waterfront, and Company's Garden.",
            "https://images.pexels.com/photos/13907703/pexels-photo-13907703.jpeg",
            "Sightseeing",
            85,
            "6 hours",
            4.7,
            198,
        ),
        experience(
            "exp7",
            "barcelona",
            "Gaudí Masterpieces Private Tour",
            "Discover the genius of Antoni Gaudí with skip-the-line entry to Sagrada Família and \
             guided visits to Casa Batlló, Casa Milà, and Park Güell.",
            "https://images.pexels.com/photos/819764/pexels-photo-819764.jpeg",
            "Cultural",
            120,
            "7 hours",
            4.9,
            276,
        ),
        experience(
            "exp8",
            "tokyo",
            "Tokyo Food Tour and Cooking Class",
            "Sample Tokyo's diverse cuisine on a guided food tour through Tsukiji Outer Market and \
             Ginza, followed by a hands-on cooking class to prepare traditional Japanese dishes.",
            "https://images.pexels.com/photos/2347383/pexels-photo-2347383.jpeg",
            "Food & Drink",
            110,
            "5 hours",
            4.8,
            312,
        ),
        experience(
            "exp9",
            "bangkok",
            "Bangkok Floating Markets and Canal Tour",
            "Experience the vibrant Damnoen Saduak Floating Market and explore Bangkok's historic \
             canals on a traditional longtail boat.",
            "https://images.pexels.com/photos/1655830/pexels-photo-1655830.jpeg",
            "Cultural",
            60,
            "6 hours",
            4.6,
            287,
        ),
        experience(
            "exp10",
            "rome",
            "Ancient Rome: Colosseum and Forum Tour",
            "Journey back in time with a guided tour of the Colosseum, Roman Forum, and Palatine \
             Hill with skip-the-line access and expert historical commentary.",
            "https://images.pexels.com/photos/1797161/pexels-photo-1797161.jpeg",
            "Historical",
            75,
            "3 hours",
            4.8,
            425,
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Emma Rodriguez".into(),
            avatar: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg".into(),
            rating: 5,
            text: "Wanderlust helped me plan the most amazing trip to Japan. The itinerary \
                   builder was super easy to use, and all the recommendations were spot on. I \
                   discovered places I would have never found on my own!"
                .into(),
            trip: "Tokyo & Kyoto, 10 days".into(),
        },
        Testimonial {
            name: "James Wilson".into(),
            avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".into(),
            rating: 4,
            text: "The budget calculator saved me so much stress! I was able to plan my entire \
                   European adventure without going over budget. The accommodation \
                   recommendations were particularly helpful for finding affordable stays."
                .into(),
            trip: "Paris & Barcelona, 14 days".into(),
        },
        Testimonial {
            name: "Sophia Chen".into(),
            avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg".into(),
            rating: 5,
            text: "As a solo traveler, I was nervous about planning a trip to Southeast Asia. \
                   Wanderlust made it so simple with detailed safety information and great local \
                   experiences. I'll definitely use it for my next adventure!"
                .into(),
            trip: "Thailand & Bali, 21 days".into(),
        },
    ]
}
