// src/noyau/validation.rs
//
// Validation lexicale AVANT toute conversion.
// Règles (sur l’entrée sans espaces) :
// - alphabet : chiffres, '.', + - * /, espaces
// - pas de début par + * / ; pas de fin par un opérateur
// - + * / doivent suivre un chiffre ou un point (donc "1**3", "1-*3" refusés)
// - '-' peut suivre n’importe quoi : moins unaire, chaînable ("10+-9", "1--3")
// - un point touche au moins un chiffre ; un seul point par nombre

use super::erreur::Rejet;
use super::jetons::{est_autorise, est_chiffre, est_espace, est_operateur};

/// Vrai si l’expression peut être convertie puis évaluée.
pub fn is_valid(expr: &str) -> bool {
    verifier(expr).is_ok()
}

/// Comme [`is_valid`], mais renvoie la première règle violée.
pub fn verifier(expr: &str) -> Result<(), Rejet> {
    // Alphabet : positions comptées dans l’entrée brute (espaces compris).
    if let Some((position, c)) = expr.chars().enumerate().find(|&(_, c)| !est_autorise(c)) {
        return Err(Rejet::CaractereInterdit { c, position });
    }

    let chars: Vec<char> = expr.chars().filter(|&c| !est_espace(c)).collect();

    let (premier, dernier) = match (chars.first(), chars.last()) {
        (Some(&p), Some(&d)) => (p, d),
        _ => return Err(Rejet::Vide),
    };
    if matches!(premier, '+' | '*' | '/') {
        return Err(Rejet::OperateurInitial(premier));
    }
    if est_operateur(dernier) {
        return Err(Rejet::OperateurFinal(dernier));
    }

    // point déjà vu dans le nombre courant
    let mut point_vu = false;

    for (i, &c) in chars.iter().enumerate() {
        let prec = i.checked_sub(1).map(|j| chars[j]);
        let suiv = chars.get(i + 1).copied();

        match c {
            '.' => {
                if point_vu {
                    return Err(Rejet::PointsMultiples);
                }
                point_vu = true;

                let chiffre_avant = prec.is_some_and(est_chiffre);
                let chiffre_apres = suiv.is_some_and(est_chiffre);
                if !chiffre_avant && !chiffre_apres {
                    return Err(Rejet::PointIsole);
                }
            }
            '+' | '*' | '/' => {
                point_vu = false;
                if let Some(p) = prec.filter(|&p| est_operateur(p)) {
                    return Err(Rejet::OperateursConsecutifs(p, c));
                }
            }
            '-' => point_vu = false,
            _ => {}
        }
    }

    Ok(())
}
