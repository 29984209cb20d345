//! Sentence banks the synthesizer picks from.
//!
//! Placeholders are filled by `Slots::fill`: `{formal}`, `{first}`, `{pronoun}`,
//! `{possessive}`, `{Possessive}`, `{region}`, `{Region}`, `{status}` and
//! `{a_rating}` ("a 6", "an 8").
//!
//! Banks feeding the pain/health positions must keep their digit counts: intro
//! and pain-intro entries carry no digits, overall-pain and health entries
//! carry exactly two (the scale bounds). Rating extraction counts on it.

// ═══════════════════════════════════════════════════════════
// Subjective
// ═══════════════════════════════════════════════════════════

pub const SUBJECTIVE_INTRO: &[&str] = &[
    "{formal} was evaluated today to determine progress and response to the current treatment plan.",
    "{formal} was evaluated today to assess {possessive} response to care.",
    "{formal} was evaluated today for progress and response to treatment.",
    "{formal} was checked for {possessive} responsiveness to the treatment plan.",
    "{formal} was assessed today for progress and response to the plan of care.",
    "{formal} was examined today to determine progress with the current treatment plan.",
    "{formal}'s overall response to the treatment plan was evaluated today.",
];

pub const SUBJECTIVE_PAIN_INTRO: &[&str] = &[
    "The following are the patient's subjective responses to questions regarding {possessive} pain levels:",
    "The patient's subjective response to a question regarding pain levels:",
    "The patient was asked about {possessive} pain levels which {pronoun} rated as follows:",
    "The patient's subjective responses to questions are as follows in regards to pain levels:",
    "The patient was questioned about {possessive} pain scale:",
    "The patient was asked subjective questions regarding {possessive} pain levels:",
];

pub const SUBJECTIVE_OVERALL_PAIN: &[&str] = &[
    "Overall pain level today on a scale of 0 (no pain) to 10 (excruciating pain) is considered {a_rating}.",
    "Current pain level today on a scale of 0 (no pain) to 10 (unbearable pain) is considered {a_rating}.",
    "{Possessive} pain level today on a scale of 0 (no pain) to 10 (unbearable pain) is reported to be {a_rating}.",
    "The patient rated {possessive} overall pain level today on a scale of 0 (no pain) to 10 (excruciating pain). The patient said {possessive} pain level can be considered {a_rating}.",
    "General pain level today, on a scale of 0 (no pain) to 10 (unbearable pain), is evaluated as {a_rating}.",
];

pub const SUBJECTIVE_HEALTH: &[&str] = &[
    "The patient rated {possessive} overall health on a scale of 1 to 10 as {a_rating}.",
    "The patient reported that {possessive} overall health on a scale of 1 to 10 is rated as {a_rating}.",
    "The patient's general health was rated on a scale of 1 to 10 as {a_rating}.",
    "Overall health on a scale of 1 to 10 is rated as {a_rating}.",
    "Current health on a scale of 1 to 10 is rated {a_rating}.",
];

/// Each entry is followed by the complaint list and a period.
pub const SUBJECTIVE_IMPROVING: &[&str] = &[
    "The patient reports improvement in {possessive}",
    "{formal} stated that there has been improvement in {possessive}",
    "The patient noted decreased symptoms in {possessive}",
    "The patient reports feeling better in {possessive}",
];

pub const SUBJECTIVE_UNCHANGED: &[&str] = &[
    "The patient reports no change in {possessive}",
    "{formal} stated that there has been no notable change in {possessive}",
    "The patient noted that symptoms remain the same in {possessive}",
];

pub const SUBJECTIVE_WORSENING: &[&str] = &[
    "The patient reports increased symptoms in {possessive}",
    "{formal} noted a worsening of {possessive}",
    "The patient stated that symptoms have increased in {possessive}",
];

/// Lead-in of the closing ratings sentence; complaint pairs follow.
pub const SUBJECTIVE_RATINGS: &str = "On a scale of 0 to 10 with 10 being the worst, {pronoun} rated {possessive}";

// ═══════════════════════════════════════════════════════════
// Objective
// ═══════════════════════════════════════════════════════════

/// Each entry names a tenderness cue; the level list follows.
pub const OBJECTIVE_TENDER: &[&str] = &[
    "Palpation of the {region} spine displayed tenderness in the spinous process at:",
    "Palpation of the {region} spine revealed tenderness at the following levels:",
    "Examination of the {region} region indicated discomfort and pain in the spinous process at:",
    "Evaluation of the {region} spinal areas showed discomfort to be present in the spinous process at:",
    "There is tenderness of the following {region} spinous levels:",
    "{Region} spine tenderness was noted in the spinous process region at:",
    "{Region} spine palpation elicited tenderness of spinous process at",
    "The spinous processes were tender on palpation at the following levels:",
    "There was tenderness on the spinous process at:",
];

/// Each entry is followed by the affected body part.
pub const OBJECTIVE_TONE: &[&str] = &[
    "Palpation of the {region} musculature demonstrates hypertonicity in the",
    "Examination of the {region} spine region indicates the presence of increased tonus in the",
    "Evaluation of the {region} spinal area shows hypertonicity in the",
    "There is hypertonicity of the",
    "Hypertonicity is palpable in the",
    "Hypertonicity is found in the",
    "{Region} spine palpation reveals increased muscle tone of the",
];

/// Each entry is followed by the affected body part.
pub const OBJECTIVE_TRIGGER: &[&str] = &[
    "Palpatory examination of the {region} musculature displays myofascial trigger points of the",
    "Palpation of the {region} musculature reveals myofascial trigger points of the",
    "Examination of the {region} spine reveals myofascial trigger points of the",
    "Palpation of the {region} region indicates the presence of trigger points in the",
    "Myofascial trigger points are palpated in the",
    "Myofascial trigger points are present in the",
];

pub const OBJECTIVE_ROM: &[&str] = &[
    "Examination of the {region} spine revealed the ROM has decreased.",
    "{Region} spine evaluation shows that the range of motion has decreased.",
    "{Region} spine evaluation shows that the ROM has declined.",
    "Ranges of motion in the {region} region have decreased.",
    "{Region} range of motion has declined.",
    "{Region} spine ROM has decreased.",
];

pub const OBJECTIVE_TEST_PAIN: &[&str] = &[
    "The patient complained of pain during testing.",
    "The patient reported pain during the performance of this test.",
    "The patient experienced pain during the execution of this test.",
    "The patient indicated that they felt discomfort and pain during the performance of this exam.",
    "The patient experienced discomfort during the execution of this test.",
    "Pain was elicited while performing this test.",
];

// ═══════════════════════════════════════════════════════════
// Assessment
// ═══════════════════════════════════════════════════════════

/// `{status}` is e.g. "has mildly improved" or "is unchanged".
pub const ASSESSMENT_STATUS: &[&str] = &[
    "The patient's overall status {status} since the last visit.",
    "Overall assessment of the patient's condition {status} since the last visit.",
    "Overall the patient's condition {status} since the last visit.",
    "{formal}'s overall condition {status} since {possessive} last visit.",
];

// ═══════════════════════════════════════════════════════════
// Plan
// ═══════════════════════════════════════════════════════════

pub const PLAN: &[&str] = &[
    "Continue with the current treatment plan.",
    "{first} will continue care as outlined in the treatment plan.",
    "Continue the current plan of care and re-evaluate at the next visit.",
    "{first} is to continue with the recommended treatment frequency.",
    "The patient will continue with the current treatment plan and home care recommendations.",
];
