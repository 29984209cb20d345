pub mod normalize;
pub mod extraction;
pub mod classification;
pub mod staircase;
pub mod narrative;
pub mod processor;

/// A prior note in the clinic's house format, as the document reader hands it over.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::normalize::NormalizedNote;

    pub const PLAIN: &str = "Springfield Chiropractic Center
Dr. Jane Roe, D.C.
John Smith
123 Main Street
Springfield, IL 62701
Date of Birth: 1/2/1980

Subjective Complaint
Mr. Smith was seen today for follow up care. Overall pain level today on a scale of 0 (no pain) to 10 (excruciating pain) is considered a 6. Overall health on a scale of 1 to 10 is rated as 7. On a scale of 0 to 10 with 10 being the worst, he rated his neck as a 6, shoulder as a 3 and lower back as a 5.

Objective
Palpation of the cervical spine revealed tenderness at the following levels: C5 and C6. Hypertonicity was noted in the upper trapezius. Cervical ROM was reduced in rotation. There was tenderness on the spinous process at L4 and L5. Trigger points were found in the quadratus lumborum. Pain was elicited during Kemp's test.

Assessment
Mr. Smith's condition is improving.

Plan
Continue care twice weekly.

Today's Treatment: Spinal manipulation C5-C6, L4-L5. Hot pack 10 min.
";

    pub const MARKUP: &str = r"{\rtf1\ansi{\fonttbl\f0 Times New Roman;}\f0\fs24
Springfield Chiropractic Center\par
Dr. Jane Roe, D.C.\par
John Smith\par
123 Main Street\par
Springfield, IL 62701\par
Date of Birth: 1/2/1980\par
\par
{\b Subjective Complaint}\par
Mr. Smith was seen today for follow up care.\par
}";

    pub fn note() -> NormalizedNote {
        NormalizedNote::new(PLAIN, MARKUP)
    }
}
