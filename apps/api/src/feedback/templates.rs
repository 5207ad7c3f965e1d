// Narrative wording for candidate- and reviewer-facing feedback.
// Behaviour is keyed on fit level and gap kind; only the prose lives here.

use crate::feedback::FitLevel;

pub fn candidate_summary(fit: FitLevel, role_label: &str, pct: f64) -> String {
    match fit {
        FitLevel::Strong => format!(
            "Your CV shows a strong match for the {role_label} role with a score of about {pct:.1}%. \
             Overall your profile is already solid."
        ),
        FitLevel::Good => format!(
            "You are a good match for the {role_label} role (score about {pct:.1}%). \
             A few areas could be strengthened to make you more competitive."
        ),
        FitLevel::Borderline => format!(
            "Your match with the {role_label} role is borderline (about {pct:.1}%). \
             The profile can still be developed to meet industry expectations."
        ),
        FitLevel::Weak => format!(
            "Your CV does not yet show a strong match for the {role_label} role (score about {pct:.1}%). \
             That does not rule the path out, but it needs considerably more skills and experience."
        ),
    }
}

pub fn candidate_hybrid(second_label: &str) -> String {
    format!(
        " Your profile is also relatively close to the {second_label} role, so both paths are worth exploring."
    )
}

pub fn hr_summary(role_label: &str, pct: f64) -> String {
    format!(
        "This candidate's profile is closest to the {role_label} role, scoring about {pct:.1}% against the internal rubric."
    )
}

pub fn hr_hybrid(second_label: &str) -> String {
    format!(" The {second_label} score is also close, so the candidate may fit a hybrid role.")
}

pub fn hr_recommendation(fit: FitLevel) -> &'static str {
    match fit {
        FitLevel::Strong => "Recommended for the technical interview stage.",
        FitLevel::Good => {
            "Worth considering, especially if the candidate pool is limited. \
             Probe the weaker areas during the interview."
        }
        FitLevel::Borderline => {
            "Could be kept as a backup candidate or considered for a junior/entry-level position."
        }
        FitLevel::Weak => {
            "Not recommended as a priority for this role unless there is context beyond the CV."
        }
    }
}

pub fn strength_core_skills(skills: &[String]) -> String {
    format!("Core skills already in place: {}.", skills.join(", "))
}

pub fn strength_core_tools(tools: &[String]) -> String {
    format!("Primary tools you already use: {}.", tools.join(", "))
}

pub fn strength_extras(nice_skills: &[String], optional_tools: &[String]) -> String {
    let mut extras = Vec::new();
    if !nice_skills.is_empty() {
        extras.push(format!("supporting skills {}", nice_skills.join(", ")));
    }
    if !optional_tools.is_empty() {
        extras.push(format!("additional tools {}", optional_tools.join(", ")));
    }
    format!("You also have {}.", extras.join(" and "))
}

pub fn improve_missing_skills(skills: &[String]) -> String {
    format!(
        "Add or highlight these core skills in your CV: {}.",
        skills.join(", ")
    )
}

pub fn improve_missing_tools(tools: &[String]) -> String {
    format!(
        "Build more hands-on experience with these primary tools: {}.",
        tools.join(", ")
    )
}

pub fn improve_experience(years: f64, preferred: f64) -> String {
    format!(
        "Your experience (~{years:.1} years) is below the usual preference for this role (~{preferred} years). \
         Consider more projects, practice, or related work experience."
    )
}

pub const IMPROVE_EDUCATION: &str = "Make the education section clearer (degree, major, and graduation year) \
     so reviewers can assess your academic background more easily.";

pub const IMPROVE_DEFAULT: &str = "The overall structure of your CV is good. Focus next on adding depth \
     to your projects and measurable results.";

pub const CANDIDATE_SUGGESTIONS: &[&str] = &[
    "Write experience as bullets that state impact (numbers, concrete results).",
    "Consider adding a clear 'Projects' section related to data work.",
    "Align the keywords in your CV with the job description you are targeting.",
];

pub fn risk_missing_skills(skills: &[String]) -> String {
    format!("No clear evidence yet for core skills: {}.", skills.join(", "))
}

pub fn risk_missing_tools(tools: &[String]) -> String {
    format!("Limited exposure to primary tools: {}.", tools.join(", "))
}

pub fn risk_experience(years: f64, preferred: f64) -> String {
    format!("Total experience (~{years:.1} years) is below the preference (~{preferred} years).")
}

pub const HR_QUESTIONS: &[&str] = &[
    "Ask the candidate to walk through the most complex data project they have worked on and their role in it.",
    "Probe the depth of their use of the core skills and tools relevant to the role.",
    "Ask about their expectations for the role (analyst vs scientist vs engineer) to check alignment.",
];
