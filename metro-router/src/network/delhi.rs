//! Built-in Delhi Metro network.
//!
//! Used when no configuration file is supplied. Every line runs at ten
//! minutes between stops; changing between co-located stops takes five.

use super::builder::NetworkBuilder;
use super::config::{DEFAULT_INTERCHANGE_MINUTES, DEFAULT_RIDE_MINUTES, NetworkConfig};

const BLUE: &[&str] = &[
    "dwarkasec21", "dwarkasec8", "dwarkasec9", "dwarkasec10", "dwarkasec11", "dwarkasec12",
    "dwarkasec13", "dwarkasec14", "dwarkasec15", "dwarkasec16", "dwarkasec17", "dwarkasec18",
    "dwarkasec19", "dwarkasec20", "uttamnagarwest", "uttamnagar", "janakpurieast",
    "tilaknagar", "subhashnagar", "tagoregarden", "rajourigarden", "rameshnagar", "motiagar",
    "karolbagh", "rajivchowk", "barakhamba", "mandihouse", "pragatimaidan", "indraprastha",
    "yamunabank", "akshardham", "mayurvihar1", "mayurvihar1ext", "mayurviharpocket1",
    "mayurviharpocket2", "newashoknagar", "noidasec15", "noidasec16", "noidasec18",
    "botanicalgarden", "golfcourse", "noidacitycentre",
];

const YELLOW: &[&str] = &[
    "hudacitycentre", "iffcochowk", "mgroad", "sikandarpur", "gurudronacharya", "arjangarh",
    "ghitorni", "sultanpur", "chhattarpur", "qutubminar", "saket", "malviyanagar", "hauzkhas",
    "greenpark", "aiims", "centralsecreteriat", "patelchowk", "rajivchowk", "newdelhi",
    "chandnichowk", "kashmiregate", "civil lines", "vidhan sabha", "vishwavidyalaya",
    "gtb nagar", "modeltown", "azadpur", "adarsgnagar", "jahanagirpuri", "haiderpur", "rohini",
    "samaypurbadli",
];

const RED: &[&str] = &[
    "dilshadgarden", "jhilmil", "mansarovapark", "shahdara", "welcome", "seelampur",
    "shastri park", "kashmiregate", "tis hazari", "pulbangash", "pratapnagar", "shastri nagar",
    "inderlok", "kanhaiyanagar", "keshavpuram", "netajinagar", "kohat enclave", "pitampura",
    "rohini", "rohiniwest", "rithala",
];

const GREEN: &[&str] = &[
    "inderlok", "ashokparkmain", "punjabibagh", "shivajipark", "madipur", "paschimvihareast",
    "paschimviharwest", "peeragarhi", "udyognagar", "maharajasurin", "nangloi",
    "nangloirailwaystation", "rajdhanipark", "mundka", "mundkaindustrialarea", "ghevra",
    "tikrikalan", "tikriborder", "panditshreeram", "bahadurgarhcity", "brigadierhoshiarsingh",
];

const MAGENTA: &[&str] = &[
    "janakpuriwest", "dabri", "dashrathpuri", "palam", "sadarbazar", "airport", "shankarvihar",
    "vasantvihar", "munirka", "rkpuram", "hauzkhas", "panchsheelpark", "chiragdelhi",
    "greaterkailash", "nehruplace", "kalkaji", "okhlainsd", "sukhdevvihar", "jamianagar",
    "okhlavihar", "jasola", "saritavihar", "kalindikunj", "shaheenbagh", "amityuniversity",
    "botanicalgarden",
];

const PINK: &[&str] = &[
    "majlispark", "azadpur", "shalimarbagh", "netajinagar", "shakurbasti", "punjabibaghwest",
    "eshwarnagar", "rajourigarden", "mayapuri", "naraina", "durgabai", "sarojininagar",
    "doublescreteriat", "ina", "southcampus", "safdarjung", "lajpatnagar", "vinobapuri",
    "ashram", "sukhdevvihar", "saritavihar", "mayurvihar", "trilokpuri", "karkardooma",
    "welcome", "shastri park", "shivvihar",
];

const GREY: &[&str] = &["dwarka", "nangli", "najafgarh", "dhansabusstand"];

const ORANGE: &[&str] = &[
    "newdelhi", "shivajistadium", "dhaula kuan", "delhiairport", "dwarkasec21",
];

/// Stops where two lines meet, plus the Grey line's walking link.
const INTERCHANGES: &[(&str, &str)] = &[
    ("dwarkasec21", "dwarkasec21"),
    ("newdelhi", "newdelhi"),
    ("rajivchowk", "rajivchowk"),
    ("kashmiregate", "kashmiregate"),
    ("inderlok", "inderlok"),
    ("hauzkhas", "hauzkhas"),
    ("botanicalgarden", "botanicalgarden"),
    ("azadpur", "azadpur"),
    ("rajourigarden", "rajourigarden"),
    ("sukhdevvihar", "sukhdevvihar"),
    ("welcome", "welcome"),
    ("dwarka", "dwarkasec21"),
];

/// The Delhi Metro network configuration.
pub fn delhi_metro() -> NetworkConfig {
    let lines: [(&str, &[&str]); 8] = [
        ("Blue", BLUE),
        ("Yellow", YELLOW),
        ("Red", RED),
        ("Green", GREEN),
        ("Magenta", MAGENTA),
        ("Pink", PINK),
        ("Grey", GREY),
        ("Orange", ORANGE),
    ];

    let builder = lines
        .iter()
        .fold(NetworkBuilder::new(), |builder, (name, stops)| {
            builder.line(name, DEFAULT_RIDE_MINUTES, stops)
        });

    INTERCHANGES
        .iter()
        .fold(builder, |builder, (from, to)| {
            builder.interchange(from, to, DEFAULT_INTERCHANGE_MINUTES)
        })
        .config()
        .clone()
}
