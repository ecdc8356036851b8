//! Built-in destination list. The first six entries are featured on the home page.

use crate::domain::{Destination, Highlight};

/// Number of leading destinations shown as featured.
pub const FEATURED_COUNT: usize = 6;

#[allow(clippy::too_many_arguments)]
fn destination(
    id: &str,
    name: &str,
    country: &str,
    description: &str,
    image_url: &str,
    tags: &[&str],
    best_time_to_visit: &str,
    budget: &str,
    recommended_stay: &str,
    highlights: [(&str, &str); 4],
    emergency_number: &str,
) -> Destination {
    Destination {
        id: id.into(),
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        best_time_to_visit: best_time_to_visit.to_string(),
        budget: budget.to_string(),
        recommended_stay: recommended_stay.to_string(),
        highlights: highlights
            .iter()
            .map(|(title, desc)| Highlight::new(title, desc))
            .collect(),
        emergency_number: emergency_number.to_string(),
    }
}

pub fn builtin() -> Vec<Destination> {
    vec![
        destination(
            "bali",
            "Bali",
            "Indonesia",
            "Known as the Island of the Gods, Bali appeals through its sheer natural beauty of \
             looming volcanoes and lush terraced rice fields that exude peace and serenity. It is \
             also famous for surfers' paradise.",
            "https://images.pexels.com/photos/1822458/pexels-photo-1822458.jpeg",
            &["Beach", "Cultural", "Relaxation"],
            "April to October",
            "$50-100 per day",
            "7-10 days",
            [
                ("Ubud Monkey Forest", "Sacred sanctuary with over 700 monkeys"),
                ("Tegallalang Rice Terraces", "Stunning stepped rice paddies"),
                ("Uluwatu Temple", "Ancient sea temple with spectacular views"),
                ("Seminyak Beach", "Trendy beach area with upscale resorts"),
            ],
            "112",
        ),
        destination(
            "paris",
            "Paris",
            "France",
            "Paris, the City of Light, is renowned for its stunning architecture, art museums, \
             historical monuments, and romantic ambiance. From the iconic Eiffel Tower to the \
             bustling Avenue des Champs-Élysées, Paris is a feast for the senses.",
            "https://images.pexels.com/photos/532826/pexels-photo-532826.jpeg",
            &["Urban", "Cultural", "Historical", "Food"],
            "April to June, September to October",
            "$150-200 per day",
            "4-7 days",
            [
                ("Eiffel Tower", "Iconic iron lattice tower"),
                ("Louvre Museum", "World's largest art museum"),
                ("Notre-Dame Cathedral", "Medieval Catholic cathedral"),
                ("Montmartre", "Artistic neighborhood with stunning views"),
            ],
            "112",
        ),
        destination(
            "kyoto",
            "Kyoto",
            "Japan",
            "Kyoto, once the capital of Japan, is famous for its numerous classical Buddhist \
             temples, gardens, imperial palaces, Shinto shrines and traditional wooden houses. \
             It's also known for formal traditions such as kaiseki dining and geisha entertainment.",
            "https://images.pexels.com/photos/590478/pexels-photo-590478.jpeg",
            &["Cultural", "Historical", "Food"],
            "March to May, October to November",
            "$120-180 per day",
            "3-5 days",
            [
                ("Fushimi Inari Shrine", "Famous for thousands of vermilion torii gates"),
                ("Arashiyama Bamboo Grove", "Stunning path through towering bamboo"),
                ("Kinkaku-ji (Golden Pavilion)", "Zen Buddhist temple covered in gold leaf"),
                ("Gion District", "Famous geisha district with preserved traditional architecture"),
            ],
            "119",
        ),
        destination(
            "santorini",
            "Santorini",
            "Greece",
            "Santorini is one of the Cyclades islands in the Aegean Sea. It was devastated by a \
             volcanic eruption in the 16th century BC, forever shaping its rugged landscape. The \
             whitewashed, cubiform houses of its two principal towns, Fira and Oia, cling to \
             cliffs above an underwater caldera (crater).",
            "https://images.pexels.com/photos/1010657/pexels-photo-1010657.jpeg",
            &["Beach", "Relaxation", "Cultural"],
            "April to November",
            "$150-250 per day",
            "4-6 days",
            [
                ("Oia Sunset", "Famous sunset views from the cliffside village"),
                ("Red Beach", "Unique beach with red volcanic sand"),
                ("Ancient Thera", "Archaeological site from the 9th century BC"),
                ("Caldera Cruise", "Boat trip to volcanic islands and hot springs"),
            ],
            "112",
        ),
        destination(
            "newyork",
            "New York City",
            "United States",
            "The Big Apple is one of the world's most iconic cities, known for its skyscrapers, \
             Broadway shows, and cultural diversity. From the bustling Times Square to the serene \
             Central Park, New York offers something for every type of traveler.",
            "https://images.pexels.com/photos/802024/pexels-photo-802024.jpeg",
            &["Urban", "Cultural", "Food"],
            "April to June, September to November",
            "$200-300 per day",
            "5-7 days",
            [
                ("Central Park", "Massive urban park in the city center"),
                ("Empire State Building", "Iconic 102-story skyscraper"),
                ("Metropolitan Museum of Art", "One of the world's largest art museums"),
                ("Brooklyn Bridge", "Historic bridge with stunning Manhattan views"),
            ],
            "911",
        ),
        destination(
            "capetown",
            "Cape Town",
            "South Africa",
            "Nestled beneath the iconic Table Mountain, Cape Town is a vibrant city that offers a \
             blend of natural beauty, rich history, and diverse culture. From pristine beaches to \
             world-class vineyards, the city has something for everyone.",
            "https://images.pexels.com/photos/259447/pexels-photo-259447.jpeg",
            &["Beach", "Adventure", "Cultural"],
            "October to April",
            "$100-150 per day",
            "5-7 days",
            [
                ("Table Mountain", "Iconic flat-topped mountain with panoramic views"),
                ("Robben Island", "Historic prison where Nelson Mandela was held"),
                ("Boulders Beach", "Home to a colony of African penguins"),
                ("Cape of Good Hope", "Scenic point where the Atlantic and Indian Oceans meet"),
            ],
            "10111",
        ),
        destination(
            "barcelona",
            "Barcelona",
            "Spain",
            "Barcelona, the cosmopolitan capital of Spain's Catalonia region, is known for its art \
             and architecture. The fantastical Sagrada Família church and other modernist \
             landmarks designed by Antoni Gaudí dot the city.",
            "https://images.pexels.com/photos/1388030/pexels-photo-1388030.jpeg",
            &["Urban", "Beach", "Cultural", "Food"],
            "May to June, September to October",
            "$120-200 per day",
            "4-6 days",
            [
                ("Sagrada Família", "Iconic unfinished church designed by Gaudí"),
                ("Park Güell", "Whimsical park with architectural elements by Gaudí"),
                ("La Rambla", "Famous tree-lined pedestrian street"),
                ("Gothic Quarter", "Historic neighborhood with medieval buildings"),
            ],
            "112",
        ),
        destination(
            "tokyo",
            "Tokyo",
            "Japan",
            "Tokyo, Japan's busy capital, mixes the ultramodern and the traditional, from neon-lit \
             skyscrapers to historic temples. The opulent Meiji Shinto Shrine is known for its \
             towering gate and surrounding woods.",
            "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg",
            &["Urban", "Cultural", "Food", "Shopping"],
            "March to May, September to November",
            "$150-250 per day",
            "5-7 days",
            [
                ("Shinjuku Gyoen National Garden", "Beautiful garden with cherry blossoms in spring"),
                ("Shibuya Crossing", "Famous busy intersection known as \"The Scramble\""),
                ("Senso-ji Temple", "Ancient Buddhist temple with five-story pagoda"),
                ("Tokyo Skytree", "Tallest tower in Japan with observation decks"),
            ],
            "119",
        ),
        destination(
            "bangkok",
            "Bangkok",
            "Thailand",
            "Bangkok, Thailand's capital, is a large city known for ornate shrines and vibrant \
             street life. The boat-filled Chao Phraya River feeds its network of canals, flowing \
             past the Rattanakosin royal district.",
            "https://images.pexels.com/photos/1031659/pexels-photo-1031659.jpeg",
            &["Urban", "Cultural", "Food", "Shopping"],
            "November to February",
            "$50-100 per day",
            "3-5 days",
            [
                ("Grand Palace", "Complex of buildings at the heart of Bangkok"),
                ("Wat Arun", "Temple of Dawn along the Chao Phraya River"),
                ("Chatuchak Weekend Market", "One of the world's largest weekend markets"),
                ("Khao San Road", "Famous backpacker street with bustling nightlife"),
            ],
            "191",
        ),
        destination(
            "rome",
            "Rome",
            "Italy",
            "Rome, Italy's capital, is a sprawling, cosmopolitan city with nearly 3,000 years of \
             globally influential art, architecture and culture on display. Ancient ruins such as \
             the Forum and the Colosseum evoke the power of the former Roman Empire.",
            "https://images.pexels.com/photos/532263/pexels-photo-532263.jpeg",
            &["Urban", "Historical", "Cultural", "Food"],
            "April to May, September to October",
            "$150-200 per day",
            "3-5 days",
            [
                ("Colosseum", "Iconic ancient Roman amphitheater"),
                ("Vatican Museums", "Vast collection of art and artifacts"),
                ("Trevi Fountain", "Baroque fountain from the 18th century"),
                ("Roman Forum", "Ruins of important government buildings"),
            ],
            "112",
        ),
        destination(
            "rio",
            "Rio de Janeiro",
            "Brazil",
            "Rio de Janeiro is a huge seaside city in Brazil, famed for its Copacabana and Ipanema \
             beaches, 38m Christ the Redeemer statue atop Mount Corcovado and for Sugarloaf \
             Mountain, a granite peak with cable cars to its summit.",
            "https://images.pexels.com/photos/2868242/pexels-photo-2868242.jpeg",
            &["Beach", "Cultural", "Adventure"],
            "December to March",
            "$80-150 per day",
            "5-7 days",
            [
                ("Christ the Redeemer", "Iconic statue overlooking the city"),
                ("Copacabana Beach", "Famous beach with a distinctive sidewalk pattern"),
                ("Sugarloaf Mountain", "Peak reached by cable car with panoramic views"),
                ("Tijuca National Park", "Urban forest with hiking trails and waterfalls"),
            ],
            "190",
        ),
        destination(
            "sydney",
            "Sydney",
            "Australia",
            "Sydney, capital of New South Wales and one of Australia's largest cities, is best \
             known for its harbourfront Sydney Opera House, with a distinctive sail-like design. \
             Massive Darling Harbour and the smaller Circular Quay port are hubs of waterside life.",
            "https://images.pexels.com/photos/995764/pexels-photo-995764.jpeg",
            &["Urban", "Beach", "Cultural"],
            "September to November, March to May",
            "$150-250 per day",
            "4-6 days",
            [
                ("Sydney Opera House", "Iconic performing arts venue"),
                ("Sydney Harbour Bridge", "Steel arch bridge across the harbor"),
                ("Bondi Beach", "Popular beach with golden sand"),
                ("Royal Botanic Garden", "Expansive garden with native and exotic plants"),
            ],
            "000",
        ),
    ]
}
