//! ICAO aircraft type designator lookup
//!
//! The built-in table covers designators commonly found in pilot logbooks
//! (ICAO Doc 8643 subset). It is not exhaustive; callers with a complete
//! source plug it in through [`TypeDesignatorLookup`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Maximum number of suggestions appended to an error message
pub const MAX_SUGGESTIONS: usize = 5;

/// Lookup used by the type-code consistency rule
pub trait TypeDesignatorLookup: Debug + Send + Sync {
    /// Whether `code` is a known designator (case-insensitive)
    fn is_valid(&self, code: &str) -> bool;

    /// Message explaining why `code` is invalid, with suggestions
    fn error_message(&self, code: &str) -> String;
}

/// Manufacturer and model behind a designator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignatorInfo {
    pub manufacturer: String,
    pub model: String,
}

// (designator, manufacturer, model)
const DESIGNATORS: &[(&str, &str, &str)] = &[
    // Cessna
    ("C150", "Cessna", "150"),
    ("C152", "Cessna", "152"),
    ("C162", "Cessna", "162 Skycatcher"),
    ("C172", "Cessna", "172 Skyhawk"),
    ("C175", "Cessna", "175"),
    ("C177", "Cessna", "177 Cardinal"),
    ("C180", "Cessna", "180"),
    ("C182", "Cessna", "182 Skylane"),
    ("C185", "Cessna", "185"),
    ("C206", "Cessna", "206"),
    ("C207", "Cessna", "207"),
    ("C208", "Cessna", "208 Caravan"),
    ("C210", "Cessna", "210 Centurion"),
    ("C310", "Cessna", "310"),
    ("C337", "Cessna", "337 Skymaster"),
    ("C340", "Cessna", "340"),
    ("C402", "Cessna", "402"),
    ("C414", "Cessna", "414"),
    ("C421", "Cessna", "421"),
    ("C441", "Cessna", "441 Conquest"),
    ("C500", "Cessna", "Citation I"),
    ("C525", "Cessna", "CitationJet"),
    ("C550", "Cessna", "Citation II"),
    ("C560", "Cessna", "Citation V"),
    ("C650", "Cessna", "Citation III"),
    ("C680", "Cessna", "Citation Sovereign"),
    ("C750", "Cessna", "Citation X"),
    // Piper
    ("PA18", "Piper", "Super Cub"),
    ("PA20", "Piper", "Pacer"),
    ("PA22", "Piper", "Tri-Pacer"),
    ("PA24", "Piper", "Comanche"),
    ("PA25", "Piper", "Pawnee"),
    ("PA28", "Piper", "Cherokee/Warrior/Archer"),
    ("PA30", "Piper", "Twin Comanche"),
    ("PA31", "Piper", "Navajo"),
    ("PA32", "Piper", "Cherokee Six/Saratoga"),
    ("PA34", "Piper", "Seneca"),
    ("PA36", "Piper", "Pawnee Brave"),
    ("PA38", "Piper", "Tomahawk"),
    ("PA44", "Piper", "Seminole"),
    ("PA46", "Piper", "Malibu/Mirage/Matrix"),
    // Beechcraft
    ("B190", "Beechcraft", "1900"),
    ("B200", "Beechcraft", "King Air 200"),
    ("B300", "Beechcraft", "King Air 350"),
    ("BE20", "Beechcraft", "King Air 200"),
    ("BE23", "Beechcraft", "Musketeer/Sundowner"),
    ("BE24", "Beechcraft", "Sierra"),
    ("BE33", "Beechcraft", "Debonair"),
    ("BE35", "Beechcraft", "Bonanza"),
    ("BE36", "Beechcraft", "Bonanza A36"),
    ("BE40", "Beechcraft", "Beechjet 400"),
    ("BE55", "Beechcraft", "Baron 55"),
    ("BE58", "Beechcraft", "Baron 58"),
    ("BE76", "Beechcraft", "Duchess"),
    ("BE77", "Beechcraft", "Skipper"),
    ("BE9L", "Beechcraft", "King Air 90"),
    ("BE9T", "Beechcraft", "King Air F90"),
    // Cirrus
    ("SR20", "Cirrus", "SR20"),
    ("SR22", "Cirrus", "SR22"),
    ("SF50", "Cirrus", "Vision Jet"),
    // Diamond
    ("DA20", "Diamond", "Katana"),
    ("DA40", "Diamond", "Diamond Star"),
    ("DA42", "Diamond", "Twin Star"),
    ("DA62", "Diamond", "DA62"),
    // American Champion
    ("CH7A", "American Champion", "7ECA Citabria"),
    ("CH7B", "American Champion", "7GCBC Citabria"),
    ("CH7C", "American Champion", "7GCBC Citabria"),
    ("CH7E", "American Champion", "7ECA Citabria"),
    ("CH7G", "American Champion", "7GCAA Citabria"),
    ("CH7K", "American Champion", "7KCAB Citabria"),
    ("CH8A", "American Champion", "8KCAB Decathlon"),
    ("CH8G", "American Champion", "8GCBC Scout"),
    ("BL8", "American Champion", "8KCAB Decathlon"),
    // Mooney
    ("M20C", "Mooney", "M20C Ranger"),
    ("M20E", "Mooney", "M20E Super 21"),
    ("M20F", "Mooney", "M20F Executive"),
    ("M20J", "Mooney", "M20J 201"),
    ("M20K", "Mooney", "M20K 231"),
    ("M20M", "Mooney", "M20M TLS"),
    ("M20R", "Mooney", "M20R Ovation"),
    ("M20S", "Mooney", "M20S Eagle"),
    ("M20T", "Mooney", "M20TN Acclaim"),
    // Grumman / American General
    ("AA1", "Grumman", "AA-1 Yankee"),
    ("AA1A", "Grumman", "AA-1A Trainer"),
    ("AA1B", "Grumman", "AA-1B Trainer"),
    ("AA1C", "Grumman", "AA-1C Lynx"),
    ("AA5", "Grumman", "AA-5 Traveler"),
    ("AA5A", "Grumman", "AA-5A Cheetah"),
    ("AA5B", "Grumman", "AA-5B Tiger"),
    ("AG5B", "American General", "AG-5B Tiger"),
    // Van's
    ("RV3", "Van's", "RV-3"),
    ("RV4", "Van's", "RV-4"),
    ("RV6", "Van's", "RV-6"),
    ("RV7", "Van's", "RV-7"),
    ("RV8", "Van's", "RV-8"),
    ("RV9", "Van's", "RV-9"),
    ("RV10", "Van's", "RV-10"),
    ("RV12", "Van's", "RV-12"),
    ("RV14", "Van's", "RV-14"),
    // Maule
    ("M4", "Maule", "M-4"),
    ("M5", "Maule", "M-5"),
    ("M6", "Maule", "M-6"),
    ("M7", "Maule", "M-7"),
    ("M8", "Maule", "M-8"),
    ("M9", "Maule", "M-9"),
    // Socata / Daher
    ("TBM7", "Socata", "TBM 700"),
    ("TBM8", "Socata", "TBM 850"),
    ("TBM9", "Daher", "TBM 900"),
    ("TB10", "Socata", "TB-10 Tobago"),
    ("TB20", "Socata", "TB-20 Trinidad"),
    ("TB21", "Socata", "TB-21 Trinidad TC"),
    // Aerobatic
    ("E300", "Extra", "EA-300"),
    ("E330", "Extra", "EA-330"),
    ("EA30", "Extra", "EA-300"),
    ("EA32", "Extra", "EA-330"),
    ("PTS1", "Pitts", "S-1 Special"),
    ("PTS2", "Pitts", "S-2 Special"),
    // Gliders
    ("AS21", "Alexander Schleicher", "ASK 21"),
    ("ASK13", "Alexander Schleicher", "ASK 13"),
    ("ASK21", "Alexander Schleicher", "ASK 21"),
    ("K21", "Alexander Schleicher", "ASK 21"),
    ("SGS233", "Schweizer", "SGS 2-33"),
    ("SGS126", "Schweizer", "SGS 1-26"),
    ("S233", "Schweizer", "SGS 2-33"),
    // Light sport
    ("CTLS", "Flight Design", "CT-LS"),
    ("FK9", "FK Lightplanes", "FK9"),
    ("RANS", "RANS", "S-6ES Coyote II"),
    // Vintage and warbirds
    ("BT13", "Vultee", "BT-13 Valiant"),
    ("T6", "North American", "T-6 Texan"),
    ("AT6", "North American", "AT-6 Texan"),
    ("T34", "Beechcraft", "T-34 Mentor"),
    ("T28", "North American", "T-28 Trojan"),
    ("P51", "North American", "P-51 Mustang"),
    ("L39", "Aero Vodochody", "L-39 Albatros"),
    // Helicopters
    ("R22", "Robinson", "R22"),
    ("R44", "Robinson", "R44"),
    ("R66", "Robinson", "R66"),
    ("H269", "Schweizer", "269/300"),
    ("S300", "Schweizer", "S-300"),
    // Utility
    ("DHC2", "De Havilland Canada", "DHC-2 Beaver"),
    ("DHC3", "De Havilland Canada", "DHC-3 Otter"),
    ("DHC6", "De Havilland Canada", "DHC-6 Twin Otter"),
    ("AN2", "Antonov", "An-2"),
    ("C130", "Lockheed", "C-130 Hercules"),
    // Transport
    ("B737", "Boeing", "737"),
    ("B738", "Boeing", "737-800"),
    ("B739", "Boeing", "737-900"),
    ("B752", "Boeing", "757-200"),
    ("B763", "Boeing", "767-300"),
    ("B772", "Boeing", "777-200"),
    ("B773", "Boeing", "777-300"),
    ("B788", "Boeing", "787-8"),
    ("B787", "Boeing", "787 Dreamliner"),
    ("A319", "Airbus", "A319"),
    ("A320", "Airbus", "A320"),
    ("A321", "Airbus", "A321"),
    ("A330", "Airbus", "A330"),
    ("A332", "Airbus", "A330-200"),
    ("A359", "Airbus", "A350-900"),
    ("A350", "Airbus", "A350"),
    ("E145", "Embraer", "ERJ 145"),
    ("E170", "Embraer", "E170"),
    ("E175", "Embraer", "E-Jet 175"),
    ("E75L", "Embraer", "E175"),
    ("CRJ2", "Bombardier", "CRJ-200"),
    ("CRJ7", "Bombardier", "CRJ-700"),
    ("CRJ9", "Bombardier", "CRJ-900"),
    ("DH8A", "De Havilland Canada", "Dash 8-100"),
    ("DH8B", "De Havilland Canada", "Dash 8-200"),
    ("DH8C", "De Havilland Canada", "Dash 8-300"),
    ("DH8D", "De Havilland Canada", "Dash 8-400"),
    ("AT72", "ATR", "ATR 72"),
    ("AT43", "ATR", "ATR 42-300"),
    ("AT42", "ATR", "ATR 42"),
];

/// Designators accepted without manufacturer details
const ADDITIONAL_DESIGNATORS: &[&str] = &["A10", "F16", "F18", "KC135"];

/// Built-in designator table
#[derive(Debug, Clone)]
pub struct IcaoDesignatorTable {
    designators: BTreeMap<String, Option<DesignatorInfo>>,
}

impl IcaoDesignatorTable {
    /// Table of the built-in designators
    pub fn new() -> Self {
        let designators = DESIGNATORS
            .iter()
            .map(|(code, manufacturer, model)| {
                (
                    code.to_string(),
                    Some(DesignatorInfo {
                        manufacturer: manufacturer.to_string(),
                        model: model.to_string(),
                    }),
                )
            })
            .collect();
        Self { designators }.with_additional_codes(ADDITIONAL_DESIGNATORS)
    }

    /// Builder pattern: accept additional designators without details
    pub fn with_additional_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            self.designators
                .entry(normalize(code.as_ref()))
                .or_insert(None);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.designators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designators.is_empty()
    }

    /// Manufacturer and model for a designator, when the table has them
    pub fn info(&self, code: &str) -> Option<&DesignatorInfo> {
        self.designators.get(&normalize(code))?.as_ref()
    }

    /// Designators of one manufacturer, sorted
    pub fn codes_by_manufacturer(&self, manufacturer: &str) -> Vec<&str> {
        self.designators
            .iter()
            .filter(|(_, info)| {
                info.as_ref()
                    .is_some_and(|i| i.manufacturer.eq_ignore_ascii_case(manufacturer))
            })
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Up to `max` known designators resembling `code`
    ///
    /// Designators sharing the first two characters come first, then those
    /// whose length is within one and that contain at least half of `code`'s
    /// distinct characters. Each group keeps table order.
    pub fn suggest(&self, code: &str, max: usize) -> Vec<&str> {
        let code = normalize(code);
        if code.is_empty() {
            return Vec::new();
        }

        let prefix: String = code.chars().take(2).collect();
        let code_chars: BTreeSet<char> = code.chars().collect();
        let code_len = code.chars().count();
        let shares_prefix = |candidate: &str| code_len >= 2 && candidate.starts_with(&prefix);

        let similar = self.designators.keys().filter(|candidate| {
            if shares_prefix(candidate.as_str()) {
                return false;
            }
            let shared = candidate
                .chars()
                .collect::<BTreeSet<char>>()
                .intersection(&code_chars)
                .count();
            candidate.chars().count().abs_diff(code_len) <= 1 && shared >= code_len / 2
        });

        self.designators
            .keys()
            .filter(|candidate| shares_prefix(candidate.as_str()))
            .chain(similar)
            .take(max)
            .map(String::as_str)
            .collect()
    }
}

impl Default for IcaoDesignatorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDesignatorLookup for IcaoDesignatorTable {
    fn is_valid(&self, code: &str) -> bool {
        let code = normalize(code);
        !code.is_empty() && self.designators.contains_key(&code)
    }

    fn error_message(&self, code: &str) -> String {
        let normalized = normalize(code);
        if normalized.is_empty() {
            return "Missing ICAO aircraft type code".to_string();
        }

        let mut message = format!("Invalid ICAO aircraft type code: '{}'", normalized);

        let suggestions = self.suggest(&normalized, MAX_SUGGESTIONS);
        if !suggestions.is_empty() {
            message.push_str(&format!(". Similar codes: {}", suggestions.join(", ")));
        }

        message.push_str(
            ". Verify at: https://www.icaodesignators.com/ or https://skybrary.aero/aircraft-types",
        );
        message
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
