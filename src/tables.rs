//! Canonicalization tables for directions, street types and unit types
//!
//! Every lookup is case-insensitive. Unknown tokens pass through unchanged,
//! and a canonical value always maps back to itself.

use crate::error::{AddressError, Result};
use std::collections::{BTreeSet, HashMap};

/// Long-form direction → abbreviation
pub const DIRECTIONS: &[(&str, &str)] = &[
    ("north", "N"),
    ("northeast", "NE"),
    ("east", "E"),
    ("southeast", "SE"),
    ("south", "S"),
    ("southwest", "SW"),
    ("west", "W"),
    ("northwest", "NW"),
];

/// Street type spelling → canonical USPS abbreviation
pub const STREET_TYPES: &[(&str, &str)] = &[
    ("allee", "aly"),
    ("alley", "aly"),
    ("ally", "aly"),
    ("anex", "anx"),
    ("annex", "anx"),
    ("annx", "anx"),
    ("arcade", "arc"),
    ("av", "ave"),
    ("aven", "ave"),
    ("avenu", "ave"),
    ("avenue", "ave"),
    ("avn", "ave"),
    ("avnue", "ave"),
    ("bayoo", "byu"),
    ("bayou", "byu"),
    ("beach", "bch"),
    ("bend", "bnd"),
    ("bluf", "blf"),
    ("bluff", "blf"),
    ("bluffs", "blfs"),
    ("bot", "btm"),
    ("bottm", "btm"),
    ("bottom", "btm"),
    ("boul", "blvd"),
    ("boulevard", "blvd"),
    ("boulv", "blvd"),
    ("branch", "br"),
    ("brdge", "brg"),
    ("bridge", "brg"),
    ("brnch", "br"),
    ("brook", "brk"),
    ("brooks", "brks"),
    ("burg", "bg"),
    ("burgs", "bgs"),
    ("bypa", "byp"),
    ("bypas", "byp"),
    ("bypass", "byp"),
    ("byps", "byp"),
    ("camp", "cp"),
    ("canyn", "cyn"),
    ("canyon", "cyn"),
    ("cape", "cpe"),
    ("causeway", "cswy"),
    ("causway", "cswy"),
    ("cen", "ctr"),
    ("cent", "ctr"),
    ("center", "ctr"),
    ("centers", "ctrs"),
    ("centr", "ctr"),
    ("centre", "ctr"),
    ("circ", "cir"),
    ("circl", "cir"),
    ("circle", "cir"),
    ("circles", "cirs"),
    ("ck", "crk"),
    ("cliff", "clf"),
    ("cliffs", "clfs"),
    ("club", "clb"),
    ("cmp", "cp"),
    ("cnter", "ctr"),
    ("cntr", "ctr"),
    ("cnyn", "cyn"),
    ("common", "cmn"),
    ("corner", "cor"),
    ("corners", "cors"),
    ("course", "crse"),
    ("court", "ct"),
    ("courts", "cts"),
    ("cove", "cv"),
    ("coves", "cvs"),
    ("cr", "crk"),
    ("crcl", "cir"),
    ("crcle", "cir"),
    ("crecent", "cres"),
    ("creek", "crk"),
    ("crescent", "cres"),
    ("cresent", "cres"),
    ("crest", "crst"),
    ("crossing", "xing"),
    ("crossroad", "xrd"),
    ("crscnt", "cres"),
    ("crsent", "cres"),
    ("crsnt", "cres"),
    ("crssing", "xing"),
    ("crssng", "xing"),
    ("crt", "ct"),
    ("curve", "curv"),
    ("dale", "dl"),
    ("dam", "dm"),
    ("div", "dv"),
    ("divide", "dv"),
    ("driv", "dr"),
    ("drive", "dr"),
    ("drives", "drs"),
    ("drv", "dr"),
    ("dvd", "dv"),
    ("estate", "est"),
    ("estates", "ests"),
    ("exp", "expy"),
    ("expr", "expy"),
    ("express", "expy"),
    ("expressway", "expy"),
    ("expw", "expy"),
    ("extension", "ext"),
    ("extensions", "exts"),
    ("extn", "ext"),
    ("extnsn", "ext"),
    ("falls", "fls"),
    ("ferry", "fry"),
    ("field", "fld"),
    ("fields", "flds"),
    ("flat", "flt"),
    ("flats", "flts"),
    ("ford", "frd"),
    ("fords", "frds"),
    ("forest", "frst"),
    ("forests", "frst"),
    ("forg", "frg"),
    ("forge", "frg"),
    ("forges", "frgs"),
    ("fork", "frk"),
    ("forks", "frks"),
    ("fort", "ft"),
    ("freeway", "fwy"),
    ("freewy", "fwy"),
    ("frry", "fry"),
    ("frt", "ft"),
    ("frway", "fwy"),
    ("frwy", "fwy"),
    ("garden", "gdn"),
    ("gardens", "gdns"),
    ("gardn", "gdn"),
    ("gateway", "gtwy"),
    ("gatewy", "gtwy"),
    ("gatway", "gtwy"),
    ("glen", "gln"),
    ("glens", "glns"),
    ("grden", "gdn"),
    ("grdn", "gdn"),
    ("grdns", "gdns"),
    ("green", "grn"),
    ("greens", "grns"),
    ("grov", "grv"),
    ("grove", "grv"),
    ("groves", "grvs"),
    ("gtway", "gtwy"),
    ("harb", "hbr"),
    ("harbor", "hbr"),
    ("harbors", "hbrs"),
    ("harbr", "hbr"),
    ("haven", "hvn"),
    ("havn", "hvn"),
    ("height", "hts"),
    ("heights", "hts"),
    ("hgts", "hts"),
    ("highway", "hwy"),
    ("highwy", "hwy"),
    ("hill", "hl"),
    ("hills", "hls"),
    ("hiway", "hwy"),
    ("hiwy", "hwy"),
    ("hllw", "holw"),
    ("hollow", "holw"),
    ("hollows", "holw"),
    ("holws", "holw"),
    ("hrbor", "hbr"),
    ("ht", "hts"),
    ("hway", "hwy"),
    ("inlet", "inlt"),
    ("island", "is"),
    ("islands", "iss"),
    ("isles", "isle"),
    ("islnd", "is"),
    ("islnds", "iss"),
    ("jction", "jct"),
    ("jctn", "jct"),
    ("jctns", "jcts"),
    ("junction", "jct"),
    ("junctions", "jcts"),
    ("junctn", "jct"),
    ("juncton", "jct"),
    ("key", "ky"),
    ("keys", "kys"),
    ("knol", "knl"),
    ("knoll", "knl"),
    ("knolls", "knls"),
    ("la", "ln"),
    ("lake", "lk"),
    ("lakes", "lks"),
    ("landing", "lndg"),
    ("lane", "ln"),
    ("lanes", "ln"),
    ("ldge", "ldg"),
    ("light", "lgt"),
    ("lights", "lgts"),
    ("lndng", "lndg"),
    ("loaf", "lf"),
    ("lock", "lck"),
    ("locks", "lcks"),
    ("lodg", "ldg"),
    ("lodge", "ldg"),
    ("loops", "loop"),
    ("manor", "mnr"),
    ("manors", "mnrs"),
    ("meadow", "mdw"),
    ("meadows", "mdws"),
    ("medows", "mdws"),
    ("mill", "ml"),
    ("mills", "mls"),
    ("mission", "msn"),
    ("missn", "msn"),
    ("mnt", "mt"),
    ("mntain", "mtn"),
    ("mntn", "mtn"),
    ("mntns", "mtns"),
    ("motorway", "mtwy"),
    ("mount", "mt"),
    ("mountain", "mtn"),
    ("mountains", "mtns"),
    ("mountin", "mtn"),
    ("mssn", "msn"),
    ("mtin", "mtn"),
    ("neck", "nck"),
    ("orchard", "orch"),
    ("orchrd", "orch"),
    ("overpass", "opas"),
    ("ovl", "oval"),
    ("parks", "park"),
    ("parkway", "pkwy"),
    ("parkways", "pkwy"),
    ("parkwy", "pkwy"),
    ("passage", "psge"),
    ("paths", "path"),
    ("pikes", "pike"),
    ("pine", "pne"),
    ("pines", "pnes"),
    ("pk", "park"),
    ("pkway", "pkwy"),
    ("pkwys", "pkwy"),
    ("pky", "pkwy"),
    ("place", "pl"),
    ("plain", "pln"),
    ("plaines", "plns"),
    ("plains", "plns"),
    ("plaza", "plz"),
    ("plza", "plz"),
    ("point", "pt"),
    ("points", "pts"),
    ("port", "prt"),
    ("ports", "prts"),
    ("prairie", "pr"),
    ("prarie", "pr"),
    ("prk", "park"),
    ("prr", "pr"),
    ("rad", "radl"),
    ("radial", "radl"),
    ("radiel", "radl"),
    ("ranch", "rnch"),
    ("ranches", "rnch"),
    ("rapid", "rpd"),
    ("rapids", "rpds"),
    ("rdge", "rdg"),
    ("rest", "rst"),
    ("ridge", "rdg"),
    ("ridges", "rdgs"),
    ("river", "riv"),
    ("rivr", "riv"),
    ("rnchs", "rnch"),
    ("road", "rd"),
    ("roads", "rds"),
    ("route", "rte"),
    ("rvr", "riv"),
    ("shoal", "shl"),
    ("shoals", "shls"),
    ("shoar", "shr"),
    ("shoars", "shrs"),
    ("shore", "shr"),
    ("shores", "shrs"),
    ("skyway", "skwy"),
    ("spng", "spg"),
    ("spngs", "spgs"),
    ("spring", "spg"),
    ("springs", "spgs"),
    ("sprng", "spg"),
    ("sprngs", "spgs"),
    ("spurs", "spur"),
    ("sqr", "sq"),
    ("sqre", "sq"),
    ("sqrs", "sqs"),
    ("squ", "sq"),
    ("square", "sq"),
    ("squares", "sqs"),
    ("station", "sta"),
    ("statn", "sta"),
    ("stn", "sta"),
    ("str", "st"),
    ("strav", "stra"),
    ("strave", "stra"),
    ("straven", "stra"),
    ("stravenue", "stra"),
    ("stravn", "stra"),
    ("stream", "strm"),
    ("street", "st"),
    ("streets", "sts"),
    ("streme", "strm"),
    ("strt", "st"),
    ("strvn", "stra"),
    ("strvnue", "stra"),
    ("sumit", "smt"),
    ("sumitt", "smt"),
    ("summit", "smt"),
    ("terr", "ter"),
    ("terrace", "ter"),
    ("throughway", "trwy"),
    ("tpk", "tpke"),
    ("tr", "trl"),
    ("trace", "trce"),
    ("traces", "trce"),
    ("track", "trak"),
    ("tracks", "trak"),
    ("trafficway", "trfy"),
    ("trail", "trl"),
    ("trails", "trl"),
    ("trk", "trak"),
    ("trks", "trak"),
    ("trls", "trl"),
    ("trnpk", "tpke"),
    ("trpk", "tpke"),
    ("tunel", "tunl"),
    ("tunls", "tunl"),
    ("tunnel", "tunl"),
    ("tunnels", "tunl"),
    ("tunnl", "tunl"),
    ("turnpike", "tpke"),
    ("turnpk", "tpke"),
    ("underpass", "upas"),
    ("union", "un"),
    ("unions", "uns"),
    ("valley", "vly"),
    ("valleys", "vlys"),
    ("vally", "vly"),
    ("vdct", "via"),
    ("viadct", "via"),
    ("viaduct", "via"),
    ("view", "vw"),
    ("views", "vws"),
    ("vill", "vlg"),
    ("villag", "vlg"),
    ("village", "vlg"),
    ("villages", "vlgs"),
    ("ville", "vl"),
    ("villg", "vlg"),
    ("villiage", "vlg"),
    ("vist", "vis"),
    ("vista", "vis"),
    ("vlly", "vly"),
    ("vst", "vis"),
    ("vsta", "vis"),
    ("walks", "walk"),
    ("well", "wl"),
    ("wells", "wls"),
    ("wy", "way"),
];

/// Unit designator spelling → canonical abbreviation
pub const UNIT_TYPES: &[(&str, &str)] = &[
    ("APT", "APT"),
    ("APT #", "APT"),
    ("APARTMENT", "APT"),
    ("BSMT", "BSMT"),
    ("BASEMENT", "BSMT"),
    ("BLDG", "BLDG"),
    ("BUILDING", "BLDG"),
    ("DEPT", "DEPT"),
    ("DEPARTMENT", "DEPT"),
    ("FL", "FL"),
    ("FLOOR", "FL"),
    ("FRNT", "FRNT"),
    ("FRONT", "FRNT"),
    ("HNGR", "HNGR"),
    ("HANGAR", "HNGR"),
    ("LBBY", "LBBY"),
    ("LOBBY", "LBBY"),
    ("LOT", "LOT"),
    ("LOWR", "LOWR"),
    ("LOWER", "LOWR"),
    ("OFC", "OFC"),
    ("OFFICE", "OFC"),
    ("PH", "PH"),
    ("PENTHOUSE", "PH"),
    ("PIER", "PIER"),
    ("REAR", "REAR"),
    ("RM", "RM"),
    ("ROOM", "RM"),
    ("SIDE", "SIDE"),
    ("SLIP", "SLIP"),
    ("SPC", "SPC"),
    ("SPACE", "SPC"),
    ("STOP", "STOP"),
    ("STE", "STE"),
    ("SUITE", "STE"),
    ("TRLR", "TRLR"),
    ("TRAILER", "TRLR"),
    ("#", "#"),
    ("UNIT", "UNIT"),
    ("UPPR", "UPPR"),
    ("UPPER", "UPPR"),
];

/// Read-only lookup tables built once per parser.
#[derive(Debug, Clone)]
pub struct CanonicalizationTables {
    directional: HashMap<String, String>,
    direction_code: HashMap<String, String>,
    street_type: HashMap<String, String>,
    street_tokens: BTreeSet<String>,
    unit_type: HashMap<String, String>,
}

impl CanonicalizationTables {
    /// Build the tables from the built-in entries.
    pub fn new() -> Result<Self> {
        Self::from_entries(DIRECTIONS, STREET_TYPES, UNIT_TYPES)
    }

    /// Build tables from arbitrary entries, validating them on the way.
    ///
    /// Fails when a key appears twice, when a canonical value is itself a key
    /// mapping somewhere else, or when two directions share an abbreviation.
    pub fn from_entries(
        directions: &[(&str, &str)],
        street_types: &[(&str, &str)],
        unit_types: &[(&str, &str)],
    ) -> Result<Self> {
        let directional = build_map("direction", directions)?;
        let direction_code = reverse("direction", &directional)?;
        let street_type = build_map("street type", street_types)?;
        let unit_type = build_map("unit type", unit_types)?;

        let street_tokens = street_type
            .iter()
            .flat_map(|(k, v)| [k.clone(), v.to_lowercase()])
            .collect();

        Ok(Self {
            directional,
            direction_code,
            street_type,
            street_tokens,
            unit_type,
        })
    }

    /// Abbreviate a direction word ("northeast" → "NE")
    #[must_use]
    pub fn canonical_direction<'a>(&'a self, token: &'a str) -> &'a str {
        lookup(&self.directional, token)
    }

    /// Expand a direction abbreviation ("NE" → "northeast")
    #[must_use]
    pub fn direction_name(&self, code: &str) -> Option<&str> {
        self.direction_code
            .get(&code.to_lowercase())
            .map(String::as_str)
    }

    /// Abbreviate a street type ("boulevard" → "blvd")
    #[must_use]
    pub fn canonical_street_type<'a>(&'a self, token: &'a str) -> &'a str {
        lookup(&self.street_type, token)
    }

    /// Abbreviate a unit designator ("suite" → "STE")
    #[must_use]
    pub fn canonical_unit_type<'a>(&'a self, token: &'a str) -> &'a str {
        lookup(&self.unit_type, token)
    }

    /// Whether the token is a known street type spelling or abbreviation
    #[must_use]
    pub fn is_street_type(&self, token: &str) -> bool {
        self.street_tokens.contains(&token.to_lowercase())
    }

    /// Every direction word and abbreviation
    pub fn direction_tokens(&self) -> impl Iterator<Item = &str> {
        self.directional
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
    }

    /// Every street type spelling and abbreviation, lowercased
    pub fn street_type_tokens(&self) -> impl Iterator<Item = &str> {
        self.street_tokens.iter().map(String::as_str)
    }
}

fn lookup<'a>(map: &'a HashMap<String, String>, token: &'a str) -> &'a str {
    map.get(&token.to_lowercase())
        .map_or(token, String::as_str)
}

fn build_map(table: &str, entries: &[(&str, &str)]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::with_capacity(entries.len());

    for (key, value) in entries {
        if map
            .insert(key.to_lowercase(), (*value).to_string())
            .is_some()
        {
            return Err(AddressError::Table(format!(
                "{table} key '{key}' appears more than once"
            )));
        }
    }

    // canonical values must be fixed points
    for value in map.values() {
        if let Some(target) = map.get(&value.to_lowercase())
            && !target.eq_ignore_ascii_case(value)
        {
            return Err(AddressError::Table(format!(
                "{table} value '{value}' maps on to '{target}'"
            )));
        }
    }

    Ok(map)
}

fn reverse(table: &str, map: &HashMap<String, String>) -> Result<HashMap<String, String>> {
    let mut res = HashMap::with_capacity(map.len());

    for (key, value) in map {
        if res.insert(value.to_lowercase(), key.clone()).is_some() {
            return Err(AddressError::Table(format!(
                "{table} abbreviation '{value}' is shared by several names"
            )));
        }
    }

    Ok(res)
}
