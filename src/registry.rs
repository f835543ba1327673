//! The GS1 Application Identifier registry.
//!
//! A fixed catalogue mapping AI prefixes to the width rule of the data field
//! following them, per the GS1 General Specifications Release 22.0. Entries
//! are matched against the head of the input in declaration order, first
//! match wins. The table is static and never mutated, so it is freely shared
//! between concurrent callers.
//!
//! The matched prefix is not always the whole AI code: the metric-measure
//! AIs (`31x` through `36x` and `39x`) and the batch AIs `703x`/`723x` carry
//! one extra digit selecting a variant of the quantity. That digit belongs
//! to the AI code but has no bearing on the field width, so the registry
//! lists the three-digit stem once and [`Entry::ai_len`] accounts for the
//! extra digit.

/// A single entry of the Application Identifier registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The digits identifying this AI at the head of the input.
    pub prefix: &'static str,
    /// The width rule for the data field following the AI code.
    pub width: Width,
}

/// The width rule for an AI's data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// The field occupies exactly this many characters.
    Fixed(usize),
    /// The field occupies up to this many characters, and at least one.
    Variable(usize),
}

impl Entry {
    /// Number of leading input characters occupied by the AI code itself.
    ///
    /// One more than the registry prefix for the variant-digit AIs, the
    /// prefix length for everything else.
    pub fn ai_len(&self) -> usize {
        let p = self.prefix.as_bytes();

        if (p[0] == b'3' && matches!(p[1], b'1'..=b'6' | b'9'))
            || self.prefix == "703"
            || self.prefix == "723"
        {
            self.prefix.len() + 1
        } else {
            self.prefix.len()
        }
    }
}

/// Find the first registry entry whose prefix starts the input.
///
/// Comparison is an exact character-sequence prefix match; no normalization
/// or numeric interpretation takes place.
pub fn lookup(input: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|e| input.starts_with(e.prefix))
}

const fn fixed(prefix: &'static str, len: usize) -> Entry {
    Entry {
        prefix,
        width: Width::Fixed(len),
    }
}

const fn variable(prefix: &'static str, max: usize) -> Entry {
    Entry {
        prefix,
        width: Width::Variable(max),
    }
}

// GS1 General Specifications Release 22.0 (Jan 22, 2022).
static ENTRIES: &[Entry] = &[
    // Two-digit AIs.
    fixed("00", 18),
    fixed("01", 14),
    fixed("02", 14),
    variable("10", 20),
    fixed("11", 6),
    fixed("12", 6),
    fixed("13", 6),
    fixed("15", 6),
    fixed("16", 6),
    fixed("17", 6),
    fixed("20", 2),
    variable("21", 20),
    variable("22", 20),
    variable("30", 8),
    variable("37", 8),
    // Internal company codes.
    variable("90", 30),
    variable("91", 90),
    variable("92", 90),
    variable("93", 90),
    variable("94", 90),
    variable("95", 90),
    variable("96", 90),
    variable("97", 90),
    variable("98", 90),
    variable("99", 90),
    // Three-digit AIs.
    variable("235", 28),
    variable("240", 30),
    variable("241", 30),
    variable("242", 6),
    variable("243", 20),
    variable("250", 30),
    variable("251", 30),
    variable("253", 30),
    variable("254", 20),
    variable("255", 25),
    variable("400", 30),
    variable("401", 30),
    fixed("402", 17),
    variable("403", 30),
    fixed("410", 13),
    fixed("411", 13),
    fixed("412", 13),
    fixed("413", 13),
    fixed("414", 13),
    fixed("415", 13),
    fixed("416", 13),
    fixed("417", 13),
    variable("420", 20),
    variable("421", 12),
    fixed("422", 3),
    variable("423", 15),
    fixed("424", 3),
    variable("425", 15),
    fixed("426", 3),
    variable("427", 3),
    variable("710", 20),
    variable("711", 20),
    variable("712", 20),
    variable("713", 20),
    variable("714", 20),
    variable("715", 20),
    // Three-digit AIs carrying a variant digit.
    fixed("310", 6),
    fixed("311", 6),
    fixed("312", 6),
    fixed("313", 6),
    fixed("314", 6),
    fixed("315", 6),
    fixed("316", 6),
    fixed("320", 6),
    fixed("321", 6),
    fixed("322", 6),
    fixed("323", 6),
    fixed("324", 6),
    fixed("325", 6),
    fixed("326", 6),
    fixed("327", 6),
    fixed("328", 6),
    fixed("329", 6),
    fixed("330", 6),
    fixed("331", 6),
    fixed("332", 6),
    fixed("333", 6),
    fixed("334", 6),
    fixed("335", 6),
    fixed("336", 6),
    fixed("337", 6),
    fixed("340", 6),
    fixed("341", 6),
    fixed("342", 6),
    fixed("343", 6),
    fixed("344", 6),
    fixed("345", 6),
    fixed("346", 6),
    fixed("347", 6),
    fixed("348", 6),
    fixed("349", 6),
    fixed("350", 6),
    fixed("351", 6),
    fixed("352", 6),
    fixed("353", 6),
    fixed("354", 6),
    fixed("355", 6),
    fixed("356", 6),
    fixed("357", 6),
    fixed("360", 6),
    fixed("361", 6),
    fixed("362", 6),
    fixed("363", 6),
    fixed("364", 6),
    fixed("365", 6),
    fixed("366", 6),
    fixed("367", 6),
    fixed("368", 6),
    fixed("369", 6),
    variable("390", 15),
    variable("391", 18),
    variable("392", 15),
    variable("393", 18),
    fixed("394", 4),
    fixed("395", 6),
    variable("703", 30),
    variable("723", 30),
    // Four-digit AIs.
    variable("4300", 35),
    variable("4301", 35),
    variable("4302", 70),
    variable("4303", 70),
    variable("4304", 70),
    variable("4305", 70),
    variable("4306", 70),
    fixed("4307", 2),
    variable("4308", 30),
    variable("4310", 35),
    variable("4311", 35),
    variable("4312", 70),
    variable("4313", 70),
    variable("4314", 70),
    variable("4315", 70),
    variable("4316", 70),
    fixed("4317", 2),
    variable("4318", 20),
    variable("4319", 30),
    variable("4320", 35),
    fixed("4321", 1),
    fixed("4322", 1),
    fixed("4323", 1),
    fixed("4324", 10),
    fixed("4325", 10),
    fixed("4326", 6),
    fixed("7001", 13),
    variable("7002", 30),
    fixed("7003", 10),
    variable("7004", 4),
    variable("7005", 12),
    fixed("7006", 6),
    variable("7007", 12),
    variable("7008", 3),
    variable("7009", 10),
    variable("7010", 2),
    variable("7020", 20),
    variable("7021", 20),
    variable("7022", 20),
    variable("7023", 30),
    fixed("7040", 4),
    variable("7240", 20),
    fixed("8001", 14),
    variable("8002", 20),
    variable("8003", 30),
    variable("8004", 30),
    fixed("8005", 6),
    fixed("8006", 18),
    variable("8007", 34),
    variable("8008", 12),
    variable("8009", 50),
    variable("8010", 30),
    variable("8011", 12),
    variable("8012", 20),
    variable("8013", 25),
    fixed("8017", 18),
    fixed("8018", 18),
    variable("8019", 10),
    variable("8020", 25),
    fixed("8026", 18),
    variable("8110", 70),
    fixed("8111", 4),
    variable("8112", 70),
    variable("8200", 70),
];
