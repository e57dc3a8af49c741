//! Broad catalogue and pools for the randomized generator.

use super::{LocalPools, Partition, PartitionSize};

const fn partition(
    name: &'static str,
    size: PartitionSize,
    cities: &'static [&'static str],
    tribes: &'static [&'static str],
    names: &'static [&'static str],
) -> Partition {
    Partition {
        name,
        size,
        pools: LocalPools {
            cities,
            tribes,
            names,
        },
    }
}

/// Partitions seeded by the randomized generator, in planning order.
pub const LEGACY_PARTITIONS: &[Partition] = &[
    partition(
        "United States",
        PartitionSize::Large,
        &["New York", "Los Angeles", "Chicago", "Austin"],
        &["Black American", "Latino", "Irish-American", "Cherokee", "Navajo"],
        &["Ava", "Noah", "Mia", "Liam", "Sophia", "Ethan"],
    ),
    partition(
        "India",
        PartitionSize::Large,
        &["Mumbai", "Delhi", "Bengaluru", "Hyderabad"],
        &["Punjabi", "Tamil", "Bengali", "Marathi", "Gujarati"],
        &["Riya", "Arjun", "Aanya", "Ishaan", "Priya", "Rahul"],
    ),
    partition(
        "Brazil",
        PartitionSize::Large,
        &["São Paulo", "Rio de Janeiro", "Brasília"],
        &["Paulista", "Carioca", "Mineiro", "Baiano"],
        &["Diego", "Camila", "Lucas", "Mariana", "Rafael", "Ana"],
    ),
    partition(
        "Nigeria",
        PartitionSize::Large,
        &["Lagos", "Abuja", "Kano"],
        &["Yoruba", "Igbo", "Hausa"],
        &["Chinedu", "Amina", "Tunde", "Ngozi"],
    ),
    partition(
        "United Kingdom",
        PartitionSize::Medium,
        &["London", "Manchester", "Birmingham"],
        &["English", "Scottish", "Welsh", "Irish"],
        &["Oliver", "Amelia", "Harry", "Isla", "Theo", "Freya"],
    ),
    partition(
        "France",
        PartitionSize::Medium,
        &["Paris", "Lyon", "Marseille"],
        &["Breton", "Provençal", "Alsatian", "Corsican"],
        &["Chloé", "Hugo", "Léa", "Lucas", "Camille", "Thomas"],
    ),
    partition(
        "Germany",
        PartitionSize::Medium,
        &["Berlin", "Munich", "Hamburg"],
        &["Bavarian", "Saxon", "Swabian", "Rhinelander"],
        &["Lina", "Leon", "Mia", "Ben", "Anna", "Felix"],
    ),
    partition(
        "Spain",
        PartitionSize::Medium,
        &["Madrid", "Barcelona", "Valencia"],
        &["Catalan", "Andalusian", "Basque", "Galician"],
        &["Mateo", "Lucía", "Sofía", "Daniel", "Martín", "Elena"],
    ),
    partition(
        "Italy",
        PartitionSize::Medium,
        &["Rome", "Milan", "Naples"],
        &["Sicilian", "Roman", "Neapolitan", "Tuscan"],
        &["Giulia", "Lorenzo", "Sofia", "Marco", "Chiara", "Matteo"],
    ),
    partition(
        "Canada",
        PartitionSize::Medium,
        &["Toronto", "Vancouver", "Montreal"],
        &["French Canadian", "English Canadian", "First Nations", "Métis"],
        &["Emma", "Noah", "Olivia", "Liam", "Sophie", "Ethan"],
    ),
    partition(
        "Mexico",
        PartitionSize::Medium,
        &["Mexico City", "Guadalajara", "Monterrey"],
        &["Mestizo", "Maya", "Nahua", "Zapotec"],
        &["Sofía", "Diego", "Valeria", "Mateo", "Camila", "Luis"],
    ),
    partition(
        "Argentina",
        PartitionSize::Medium,
        &["Buenos Aires", "Córdoba", "Rosario"],
        &["Porteño", "Gaucho", "Mestizo"],
        &["Sofía", "Mateo", "Valentina", "Thiago", "Martina", "Nicolás"],
    ),
    partition(
        "South Africa",
        PartitionSize::Medium,
        &["Cape Town", "Johannesburg", "Durban"],
        &["Zulu", "Xhosa", "Sotho", "Afrikaner"],
        &["Thandi", "Sipho", "Amahle", "Lebo", "Naledi", "Siyabonga"],
    ),
    partition(
        "Kenya",
        PartitionSize::Medium,
        &["Nairobi", "Mombasa", "Kisumu"],
        &["Kikuyu", "Luo", "Kalenjin", "Luhya"],
        &["Wanjiku", "Akinyi", "Kamau", "Otieno", "Njeri", "Mwangi"],
    ),
    partition(
        "Tanzania",
        PartitionSize::Medium,
        &["Dar es Salaam", "Arusha", "Mwanza"],
        &["Sukuma", "Chagga", "Haya", "Hehe"],
        &["Asha", "Neema", "Baraka", "Juma", "Zawadi", "Hassan"],
    ),
    partition(
        "Uganda",
        PartitionSize::Medium,
        &["Kampala", "Gulu", "Mbarara", "Jinja"],
        &["Baganda", "Banyankole", "Acholi", "Basoga"],
        &["Moses", "Aisha", "Brian", "Grace"],
    ),
    partition(
        "Egypt",
        PartitionSize::Medium,
        &["Cairo", "Alexandria", "Giza"],
        &["Egyptian Arab", "Nubian", "Bedouin"],
        &["Omar", "Mariam", "Youssef", "Nour", "Ahmed", "Salma"],
    ),
    partition(
        "Norway",
        PartitionSize::Small,
        &["Oslo", "Bergen", "Trondheim"],
        &["Norwegian", "Sámi"],
        &["Nora", "Lars", "Ingrid", "Sofia", "Ola", "Emil"],
    ),
    partition(
        "Netherlands",
        PartitionSize::Small,
        &["Amsterdam", "Rotterdam", "Utrecht"],
        &["Dutch", "Frisian"],
        &["Sanne", "Daan", "Noa", "Sem", "Lotte", "Milan"],
    ),
    partition(
        "Sweden",
        PartitionSize::Small,
        &["Stockholm", "Gothenburg", "Malmö"],
        &["Swedish", "Sámi"],
        &["Freja", "Oscar", "Elsa", "Noah", "Maja", "Elias"],
    ),
    partition(
        "United Arab Emirates",
        PartitionSize::Small,
        &["Dubai", "Abu Dhabi", "Sharjah"],
        &["Emirati", "Arab"],
        &["Alya", "Saeed", "Noor", "Omar", "Mariam", "Khalid"],
    ),
    partition(
        "Qatar",
        PartitionSize::Small,
        &["Doha", "Al Rayyan", "Al Wakrah"],
        &["Qatari", "Arab"],
        &["Hamad", "Noor", "Mariam", "Fahad", "Aisha", "Khalifa"],
    ),
    partition(
        "Singapore",
        PartitionSize::Small,
        &["Central", "Queenstown", "Tampines"],
        &["Chinese", "Malay", "Indian"],
        &["Wei", "Jun", "Aisyah", "Nur", "Arjun", "Ananya"],
    ),
    partition(
        "Philippines",
        PartitionSize::Small,
        &["Manila", "Cebu City", "Davao City"],
        &["Tagalog", "Cebuano", "Ilocano"],
        &["Maria", "Jose", "Juan", "Angel", "Kathryn", "Paolo"],
    ),
    partition(
        "Indonesia",
        PartitionSize::Small,
        &["Jakarta", "Surabaya", "Bandung"],
        &["Javanese", "Sundanese", "Balinese"],
        &["Putri", "Budi", "Ayu", "Rizki", "Dewi", "Andi"],
    ),
    partition(
        "Ghana",
        PartitionSize::Small,
        &["Accra", "Kumasi", "Takoradi"],
        &["Akan", "Ewe", "Ga"],
        &["Ama", "Kofi", "Abena", "Kwame", "Akosua", "Yaw"],
    ),
    partition(
        "Senegal",
        PartitionSize::Small,
        &["Dakar", "Thiès", "Saint-Louis"],
        &["Wolof", "Serer", "Pulaar"],
        &["Awa", "Mamadou", "Fatou", "Cheikh", "Mariama", "Ibrahima"],
    ),
    partition(
        "Morocco",
        PartitionSize::Small,
        &["Casablanca", "Rabat", "Marrakesh"],
        &["Arab", "Amazigh"],
        &["Youssef", "Khadija", "Omar", "Salma", "Amine", "Nadia"],
    ),
    partition(
        "Tunisia",
        PartitionSize::Small,
        &["Tunis", "Sfax", "Sousse"],
        &["Tunisian Arab", "Amazigh"],
        &["Sami", "Amina", "Yassine", "Ines", "Ahmed", "Sarra"],
    ),
    partition(
        "Rwanda",
        PartitionSize::Small,
        &["Kigali", "Huye", "Rubavu"],
        &["Hutu", "Tutsi", "Twa"],
        &["Aline", "Eric", "Clarisse", "Patrick", "Diane", "Claude"],
    ),
    partition(
        "Zimbabwe",
        PartitionSize::Small,
        &["Harare", "Bulawayo", "Mutare"],
        &["Shona", "Ndebele"],
        &["Tariro", "Tawanda", "Rudo", "Farai", "Nyasha", "Simba"],
    ),
    partition(
        "Zambia",
        PartitionSize::Small,
        &["Lusaka", "Ndola", "Livingstone"],
        &["Bemba", "Tonga", "Lozi"],
        &["Chanda", "Mwila", "Natasha", "Kelvin", "Thandiwe", "Brian"],
    ),
    partition(
        "Botswana",
        PartitionSize::Small,
        &["Gaborone", "Francistown", "Maun"],
        &["Tswana", "Kalanga"],
        &["Kago", "Amantle", "Neo", "Thabo", "Onalenna", "Kelebogile"],
    ),
    partition(
        "Namibia",
        PartitionSize::Small,
        &["Windhoek", "Swakopmund", "Walvis Bay"],
        &["Ovambo", "Herero", "Nama"],
        &["Tate", "Nandi", "Amutenya", "Elago", "Nangula", "Petrus"],
    ),
    partition(
        "Cameroon",
        PartitionSize::Small,
        &["Douala", "Yaoundé", "Bamenda"],
        &["Bamileke", "Fang", "Fulani"],
        &["Nadia", "Junior", "Amina", "Blaise", "Chantal", "Brice"],
    ),
];

pub(crate) const LEGACY_PROFESSIONS: &[&str] = &[
    "Product Designer",
    "Software Engineer",
    "Nurse",
    "Teacher",
    "Entrepreneur",
    "Photographer",
    "Chef",
    "Marketing Manager",
    "Data Analyst",
    "Fitness Coach",
    "Architect",
    "Doctor",
    "Musician",
    "Researcher",
    "Travel Writer",
    "UX Writer",
    "Barista",
    "Event Planner",
];

pub(crate) const LEGACY_INTERESTS: &[&str] = &[
    "Hiking",
    "Coffee",
    "Cooking",
    "Yoga",
    "Travel",
    "Photography",
    "Reading",
    "Music",
    "Art",
    "Gaming",
    "Fitness",
    "Tech",
    "Pets",
    "Outdoors",
    "Foodie",
    "Dancing",
    "Museums",
    "Beach days",
    "Cinema",
    "Running",
    "Cycling",
    "Journaling",
    "Volunteering",
    "Language exchange",
];

pub(crate) const LEGACY_GENDERS: &[crate::Gender] = &[
    crate::Gender::Woman,
    crate::Gender::Man,
    crate::Gender::NonBinary,
];

pub(crate) const LEGACY_LOOKING_FOR: &[&str] = &["Women", "Men", "Everyone"];

pub(crate) const TAGLINES: &[&str] = &["Starter community profile", "New here"];

pub(crate) const VIBES: &[&str] = &[
    "curious",
    "warm",
    "adventurous",
    "low-key",
    "ambitious",
    "playful",
];
