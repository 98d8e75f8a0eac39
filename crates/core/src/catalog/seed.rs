use crate::domain::destination::Destination;

/// A catalog row as stored, including the presentation-only columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedDestination {
    pub name: &'static str,
    pub country: &'static str,
    pub avg_budget: f64,
    pub avg_rating: f64,
    pub popularity: i32,
    pub description: &'static str,
}

impl SeedDestination {
    pub fn to_destination(&self) -> Destination {
        Destination::new(self.name, self.avg_budget, self.avg_rating, self.popularity)
    }
}

const fn d(
    name: &'static str,
    country: &'static str,
    avg_budget: f64,
    avg_rating: f64,
    popularity: i32,
    description: &'static str,
) -> SeedDestination {
    SeedDestination {
        name,
        country,
        avg_budget,
        avg_rating,
        popularity,
        description,
    }
}

/// Built-in world corpus loaded by the seeder.
pub const WORLD_DESTINATIONS: &[SeedDestination] = &[
    d("Paris", "France", 5500.0, 4.9, 100, "City of Light - iconic monuments and cuisine"),
    d("London", "United Kingdom", 5800.0, 4.9, 95, "Historic capital with world-class museums"),
    d("Rome", "Italy", 5200.0, 4.9, 98, "Ancient history and Renaissance art"),
    d("Barcelona", "Spain", 4800.0, 4.9, 90, "Beach city with Gaudí architecture"),
    d("Venice", "Italy", 6500.0, 4.9, 92, "Romantic canals and historic architecture"),
    d("Florence", "Italy", 4500.0, 4.9, 89, "Renaissance art and Tuscan wine"),
    d("Vienna", "Austria", 5000.0, 4.8, 87, "Imperial palaces and classical music"),
    d("Amsterdam", "Netherlands", 4200.0, 4.8, 88, "Canals, cycling, and vibrant culture"),
    d("Berlin", "Germany", 3500.0, 4.7, 85, "History, art, and innovative nightlife"),
    d("Prague", "Czech Republic", 2200.0, 4.7, 82, "Medieval charm and affordable luxury"),
    d("Budapest", "Hungary", 2400.0, 4.7, 83, "Thermal baths and Danube beauty"),
    d("Edinburgh", "United Kingdom", 4000.0, 4.7, 84, "Medieval castle and Scottish culture"),
    d("Lisbon", "Portugal", 2800.0, 4.6, 81, "Coastal charm with historic tiles"),
    d("Dublin", "Ireland", 3200.0, 4.6, 79, "Literary heritage and lively pubs"),
    d("Stockholm", "Sweden", 4500.0, 4.6, 86, "Island city with Nordic design"),
    d("Copenhagen", "Denmark", 4200.0, 4.6, 82, "Design capital with hygge culture"),
    d("Krakow", "Poland", 1800.0, 4.7, 78, "Medieval old town and Jewish quarter"),
    d("Seville", "Spain", 2200.0, 4.7, 80, "Flamenco, tapas, and Moorish heritage"),
    d("Milan", "Italy", 4600.0, 4.6, 78, "Fashion capital and Duomo cathedral"),
    d("Zurich", "Switzerland", 6000.0, 4.7, 81, "Luxury and Alpine views"),
    d("Geneva", "Switzerland", 5800.0, 4.6, 79, "International hub with lake views"),
    d("Naples", "Italy", 1800.0, 4.4, 74, "Pizza, passion, and historic streets"),
    d("Tokyo", "Japan", 6800.0, 4.8, 95, "Modern metropolis with ancient temples"),
    d("Singapore", "Singapore", 5500.0, 4.8, 88, "Ultra-modern city-state with multicultural blend"),
    d("Hong Kong", "Hong Kong", 6000.0, 4.8, 89, "Vertical city with stunning harbor"),
    d("Bali", "Indonesia", 3200.0, 4.9, 91, "Tropical paradise with Hindu temples"),
    d("Seoul", "South Korea", 3800.0, 4.8, 86, "K-pop culture and tech innovation"),
    d("Bangkok", "Thailand", 2600.0, 4.8, 92, "Bustling streets, temples, and street food"),
    d("Siem Reap", "Cambodia", 1600.0, 4.8, 87, "Angkor temples and local culture"),
    d("Hanoi", "Vietnam", 1400.0, 4.7, 84, "Historic streets and French colonial charm"),
    d("Ho Chi Minh City", "Vietnam", 1500.0, 4.6, 83, "Bustling energy and street markets"),
    d("Phuket", "Thailand", 2000.0, 4.7, 85, "Beach resort with vibrant nightlife"),
    d("Chiang Mai", "Thailand", 1300.0, 4.8, 81, "Temples and trekking in the mountains"),
    d("Manila", "Philippines", 1200.0, 4.3, 72, "Chaotic energy and beach nearby"),
    d("Kuala Lumpur", "Malaysia", 1800.0, 4.6, 80, "Twin towers and colonial heritage"),
    d("Jaipur", "India", 1400.0, 4.6, 78, "Pink city with majestic forts"),
    d("Agra", "India", 1300.0, 4.9, 80, "Taj Mahal and romantic sunsets"),
    d("Delhi", "India", 1200.0, 4.4, 74, "Chaotic capital with Mughal architecture"),
    d("Goa", "India", 1500.0, 4.7, 82, "Beaches, churches, and Portuguese heritage"),
    d("Darjeeling", "India", 1200.0, 4.7, 75, "Tea plantations and Himalayan views"),
    d("Kathmandu", "Nepal", 1100.0, 4.7, 79, "Mountain temples and spiritual energy"),
    d("Pokhara", "Nepal", 900.0, 4.8, 76, "Lakes and Annapurna trekking base"),
    d("Yangon", "Myanmar", 1000.0, 4.4, 70, "Golden pagodas and colonial streets"),
    d("Phnom Penh", "Cambodia", 1100.0, 4.2, 68, "Historic temples and riverside charm"),
    d("Islamabad", "Pakistan", 1000.0, 4.4, 68, "Mountain-surrounded capital"),
    d("Lahore", "Pakistan", 950.0, 4.3, 70, "Mughal gardens and street food"),
    d("Dubai", "United Arab Emirates", 5500.0, 4.7, 85, "Luxury shopping and desert safaris"),
    d("Abu Dhabi", "United Arab Emirates", 5200.0, 4.6, 81, "Modern museums and camel racing"),
    d("Jerusalem", "Israel", 3000.0, 4.7, 82, "Holy sites and historical significance"),
    d("Petra", "Jordan", 2400.0, 4.9, 84, "Rose-colored ancient city carved in stone"),
    d("Tel Aviv", "Israel", 3800.0, 4.6, 78, "Beaches and vibrant nightlife"),
    d("Amman", "Jordan", 1800.0, 4.5, 72, "Ancient Roman ruins and hospitality"),
    d("New York City", "USA", 6500.0, 4.8, 96, "The city that never sleeps"),
    d("San Francisco", "USA", 6000.0, 4.7, 87, "Golden Gate and tech culture"),
    d("Los Angeles", "USA", 5200.0, 4.6, 85, "Beaches, entertainment, and endless sun"),
    d("Miami", "USA", 4800.0, 4.6, 84, "Beaches, art deco, and Cuban culture"),
    d("Las Vegas", "USA", 4200.0, 4.7, 88, "Casinos, shows, and desert nightlife"),
    d("New Orleans", "USA", 3200.0, 4.8, 86, "Jazz, Creole food, and vibrant culture"),
    d("Chicago", "USA", 3600.0, 4.7, 83, "Architecture, deep dish pizza, and museums"),
    d("Boston", "USA", 3800.0, 4.6, 79, "Historic Revolutionary War sites"),
    d("Washington DC", "USA", 3400.0, 4.7, 81, "Monuments, museums, and politics"),
    d("Vancouver", "Canada", 4500.0, 4.7, 84, "Mountains, ocean, and cosmopolitan culture"),
    d("Montreal", "Canada", 3200.0, 4.7, 82, "French flair and vibrant nightlife"),
    d("Rio de Janeiro", "Brazil", 3600.0, 4.7, 89, "Christ the Redeemer and Copacabana"),
    d("Buenos Aires", "Argentina", 3000.0, 4.8, 88, "Tango, steak, and European elegance"),
    d("Lima", "Peru", 2600.0, 4.7, 84, "Culinary capital with coastal views"),
    d("Cusco", "Peru", 2200.0, 4.8, 88, "Gateway to Machu Picchu and Incan history"),
    d("Machu Picchu", "Peru", 2500.0, 4.9, 90, "Iconic Incan citadel in the clouds"),
    d("Seattle", "USA", 3400.0, 4.6, 78, "Coffee, tech, and mountain views"),
    d("Portland", "USA", 2800.0, 4.6, 77, "Quirky culture and food scene"),
    d("Denver", "USA", 2600.0, 4.5, 76, "Mile-high city with Rocky Mountain access"),
    d("Austin", "USA", 2900.0, 4.7, 80, "Live music and tech startup culture"),
    d("Nashville", "USA", 2400.0, 4.6, 75, "Country music capital"),
    d("Toronto", "Canada", 3800.0, 4.6, 81, "Multicultural Canadian metropolis"),
    d("Cancun", "Mexico", 3200.0, 4.6, 86, "Beach resort with Mayan ruins nearby"),
    d("Playa del Carmen", "Mexico", 3000.0, 4.5, 82, "Caribbean beaches and cenotes"),
    d("Puerto Vallarta", "Mexico", 2800.0, 4.6, 80, "Romantic beach town and nightlife"),
    d("Mexico City", "Mexico", 2400.0, 4.7, 85, "Ancient pyramids and street art"),
    d("San Juan", "Puerto Rico", 3400.0, 4.6, 81, "Caribbean island with colonial charm"),
    d("Havana", "Cuba", 2200.0, 4.8, 86, "Classic cars and Caribbean nostalgia"),
    d("Salvador", "Brazil", 2000.0, 4.7, 82, "Bahian culture and beach vibes"),
    d("Bogota", "Colombia", 2100.0, 4.6, 77, "Mountain city with art and culture"),
    d("Cartagena", "Colombia", 2400.0, 4.8, 83, "Walled colonial city on Caribbean"),
    d("Oaxaca", "Mexico", 1500.0, 4.8, 81, "Indigenous culture and colorful markets"),
    d("Guatemala City", "Guatemala", 1200.0, 4.3, 68, "Gateway to Mayan wonders"),
    d("Antigua", "Guatemala", 1300.0, 4.8, 79, "Colorful colonial architecture"),
    d("San Jose", "Costa Rica", 2000.0, 4.6, 80, "Central valley and volcanic landscapes"),
    d("Panama City", "Panama", 1700.0, 4.4, 73, "Canal engineering and tropical vibes"),
    d("Belize City", "Belize", 1600.0, 4.4, 72, "Caribbean vibes and Mayan sites"),
    d("Quito", "Ecuador", 1600.0, 4.6, 76, "On the equator with mountain views"),
    d("La Paz", "Bolivia", 1400.0, 4.6, 77, "High altitude city with indigenous culture"),
    d("Santiago", "Chile", 2500.0, 4.6, 79, "Modern capital with wine and mountains"),
    d("Atacama Desert", "Chile", 2100.0, 4.8, 80, "Otherworldly desert landscape"),
    d("Sao Paulo", "Brazil", 2300.0, 4.5, 75, "Art, food scene, and urban energy"),
    d("Cape Town", "South Africa", 3400.0, 4.9, 89, "Table Mountain and coastal beauty"),
    d("Masai Mara", "Kenya", 3200.0, 4.9, 87, "World-renowned safari destination"),
    d("Giza", "Egypt", 2200.0, 4.9, 85, "Ancient wonders of the world"),
    d("Cairo", "Egypt", 1800.0, 4.7, 82, "Pyramids, Sphinx, and Nile River"),
    d("Luxor", "Egypt", 1600.0, 4.8, 80, "Valley of the Kings and Karnak temples"),
    d("Zanzibar", "Tanzania", 2000.0, 4.8, 83, "Spice island with pristine beaches"),
    d("Marrakech", "Morocco", 2200.0, 4.8, 85, "Red city with Sahara access"),
    d("Fez", "Morocco", 1800.0, 4.7, 80, "Medina with ancient leather tanneries"),
    d("Kigali", "Rwanda", 1900.0, 4.6, 76, "Clean city with mountain gorilla trekking"),
    d("Johannesburg", "South Africa", 2000.0, 4.4, 73, "Vibrant city with Apartheid history"),
    d("Nairobi", "Kenya", 1600.0, 4.5, 75, "Gateway to African safaris"),
    d("Tanzania", "Tanzania", 1900.0, 4.8, 84, "Mount Kilimanjaro and Serengeti"),
    d("Dar es Salaam", "Tanzania", 1500.0, 4.5, 74, "Port city with Swahili heritage"),
    d("Casablanca", "Morocco", 1500.0, 4.6, 78, "Coastal city with Hassan II Mosque"),
    d("Tangier", "Morocco", 1300.0, 4.5, 76, "Gateway between Africa and Europe"),
    d("Essaouira", "Morocco", 1400.0, 4.6, 77, "Beach town with bohemian vibe"),
    d("Accra", "Ghana", 1300.0, 4.4, 70, "West African cultural hub"),
    d("Lagos", "Nigeria", 1400.0, 4.2, 69, "Bustling metropolis on the coast"),
    d("Kampala", "Uganda", 1200.0, 4.4, 72, "Vibrant capital in the Pearl of Africa"),
    d("Addis Ababa", "Ethiopia", 900.0, 4.3, 68, "Ancient Orthodox churches"),
    d("Sydney", "Australia", 5500.0, 4.8, 89, "Opera House and Bondi Beach"),
    d("Queenstown", "New Zealand", 5200.0, 4.9, 87, "Adrenaline sports and mountain beauty"),
    d("Melbourne", "Australia", 4800.0, 4.7, 86, "Coffee capital and street art"),
    d("Auckland", "New Zealand", 4600.0, 4.7, 83, "Gateway to Aotearoa"),
    d("Honolulu", "USA", 5800.0, 4.8, 87, "Hawaiian beaches and culture"),
    d("Fiji", "Fiji", 3600.0, 4.9, 88, "Tropical island paradise"),
    d("Bora Bora", "French Polynesia", 8500.0, 5.0, 89, "Overwater bungalows and lagoon"),
    d("Tahiti", "French Polynesia", 7500.0, 4.9, 86, "Polynesian culture and beaches"),
    d("Brisbane", "Australia", 3200.0, 4.6, 81, "Sunny subtropical city"),
    d("Cairns", "Australia", 3600.0, 4.8, 85, "Gateway to Great Barrier Reef"),
    d("Gold Coast", "Australia", 3000.0, 4.7, 83, "Beach resort paradise"),
    d("Perth", "Australia", 3400.0, 4.6, 79, "Isolated Western paradise"),
    d("Hobart", "Australia", 2800.0, 4.7, 77, "Gateway to Tasmania's wilderness"),
    d("Christchurch", "New Zealand", 3400.0, 4.7, 80, "Adventure capital of the South Island"),
    d("Samoa", "Samoa", 2800.0, 4.8, 82, "South Pacific island charm"),
];
