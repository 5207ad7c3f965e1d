use crate::scoring::scorer::ScoreResult;

/// Role with the highest percent. Ties go to the role declared first in the rubric.
/// `None` only when the rubric has no roles.
pub fn recommend_role(result: &ScoreResult) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (role, percent) in result.percent.iter() {
        match best {
            Some((_, best_pct)) if *percent <= best_pct => {}
            _ => best = Some((role, *percent)),
        }
    }
    best.map(|(role, _)| role)
}
