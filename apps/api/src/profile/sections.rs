//! Section segmentation — splits raw résumé text into labelled zones by header lines.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Summary,
    Other,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Experience,
        Zone::Education,
        Zone::Skills,
        Zone::Projects,
        Zone::Certifications,
        Zone::Summary,
        Zone::Other,
    ];

    fn index(self) -> usize {
        match self {
            Zone::Experience => 0,
            Zone::Education => 1,
            Zone::Skills => 2,
            Zone::Projects => 3,
            Zone::Certifications => 4,
            Zone::Summary => 5,
            Zone::Other => 6,
        }
    }
}

/// Header phrases per zone, checked in this order; the first prefix match wins.
/// No phrase may be a prefix of another zone's phrase listed later.
pub const ZONE_HEADERS: &[(Zone, &[&str])] = &[
    (
        Zone::Summary,
        &[
            "summary",
            "professional summary",
            "professional profile",
            "about me",
            "objective",
            "ringkasan",
            "tentang saya",
        ],
    ),
    (
        Zone::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "work history",
            "pengalaman",
            "riwayat pekerjaan",
        ],
    ),
    (
        Zone::Education,
        &[
            "education",
            "academic background",
            "pendidikan",
            "riwayat pendidikan",
        ],
    ),
    (
        Zone::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "keahlian",
            "kemampuan",
        ],
    ),
    (
        Zone::Projects,
        &["projects", "project experience", "portfolio", "proyek"],
    ),
    (
        Zone::Certifications,
        &[
            "certifications",
            "certification",
            "certificates",
            "licenses",
            "sertifikasi",
            "sertifikat",
        ],
    ),
];

/// Zone name -> accumulated text. Every input line lands in exactly one zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedText {
    zones: [String; 7],
}

impl SegmentedText {
    pub fn get(&self, zone: Zone) -> &str {
        &self.zones[zone.index()]
    }

    fn push_line(&mut self, zone: Zone, line: &str) {
        let text = &mut self.zones[zone.index()];
        text.push_str(line);
        text.push('\n');
    }

    /// True when no header was recognised and everything fell into `other`.
    pub fn is_unsectioned(&self) -> bool {
        Zone::ALL
            .iter()
            .filter(|z| **z != Zone::Other)
            .all(|z| self.get(*z).is_empty())
    }
}

/// Returns the zone whose header phrase the (trimmed) line starts with, if any.
pub fn match_header(line: &str) -> Option<Zone> {
    let lower = line.trim().to_lowercase();
    ZONE_HEADERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| lower.starts_with(p)))
        .map(|(zone, _)| *zone)
}

/// Folds raw text into zones. Header lines switch the current zone and are not kept.
pub fn segment(raw_text: &str) -> SegmentedText {
    let (_, segmented) = raw_text.lines().fold(
        (Zone::Other, SegmentedText::default()),
        |(current, mut acc), line| {
            let stripped = line.trim();
            match match_header(stripped) {
                Some(zone) => (zone, acc),
                None => {
                    acc.push_line(current, stripped);
                    (current, acc)
                }
            }
        },
    );
    segmented
}

#[cfg(test)]
mod tests {
    use super::*;

    const CV: &str = "Jane Doe\n\
        jane@example.com\n\
        Summary\n\
        Data person.\n\
        Work Experience\n\
        Data Analyst, Acme 2020 - 2022\n\
        Education\n\
        Universitas Indonesia, Bachelor of Statistics\n\
        Skills\n\
        Python, SQL\n\
        Projects\n\
        Churn dashboard\n\
        Certifications\n\
        Google Data Analytics\n";

    #[test]
    fn test_lines_before_first_header_go_to_other() {
        let seg = segment(CV);
        assert_eq!(seg.get(Zone::Other), "Jane Doe\njane@example.com\n");
    }

    #[test]
    fn test_each_zone_gets_its_content() {
        let seg = segment(CV);
        assert_eq!(seg.get(Zone::Summary), "Data person.\n");
        assert_eq!(seg.get(Zone::Experience), "Data Analyst, Acme 2020 - 2022\n");
        assert_eq!(
            seg.get(Zone::Education),
            "Universitas Indonesia, Bachelor of Statistics\n"
        );
        assert_eq!(seg.get(Zone::Skills), "Python, SQL\n");
        assert_eq!(seg.get(Zone::Projects), "Churn dashboard\n");
        assert_eq!(seg.get(Zone::Certifications), "Google Data Analytics\n");
    }

    #[test]
    fn test_header_lines_are_dropped() {
        let seg = segment(CV);
        for zone in Zone::ALL {
            assert!(
                !seg.get(zone).to_lowercase().contains("work experience"),
                "header leaked into {zone:?}"
            );
        }
    }

    #[test]
    fn test_no_headers_means_everything_in_other() {
        let seg = segment("just some text\nmore text");
        assert!(seg.is_unsectioned());
        assert_eq!(seg.get(Zone::Other), "just some text\nmore text\n");
        assert_eq!(seg.get(Zone::Experience), "");
    }

    #[test]
    fn test_header_match_is_prefix_and_case_insensitive() {
        assert_eq!(match_header("  TECHNICAL SKILLS  "), Some(Zone::Skills));
        assert_eq!(match_header("Pengalaman Kerja"), Some(Zone::Experience));
        assert_eq!(match_header("Professional Summary"), Some(Zone::Summary));
        assert_eq!(match_header("Python, SQL"), None);
    }

    #[test]
    fn test_singular_project_line_stays_in_experience() {
        let seg = segment(
            "Work Experience\n\
             Project lead on churn model\n\
             Data Analyst, Acme 2020 - 2022\n\
             Profile of customers built in SQL\n",
        );
        assert_eq!(
            seg.get(Zone::Experience),
            "Project lead on churn model\n\
             Data Analyst, Acme 2020 - 2022\n\
             Profile of customers built in SQL\n"
        );
        assert_eq!(seg.get(Zone::Projects), "");
        assert_eq!(seg.get(Zone::Summary), "");
    }

    #[test]
    fn test_multiword_project_and_profile_headers() {
        assert_eq!(match_header("Project Experience"), Some(Zone::Projects));
        assert_eq!(match_header("Professional Profile"), Some(Zone::Summary));
        assert_eq!(match_header("Project lead on churn model"), None);
    }

    #[test]
    fn test_empty_input() {
        let seg = segment("");
        assert!(seg.is_unsectioned());
        assert_eq!(seg.get(Zone::Other), "");
    }
}
