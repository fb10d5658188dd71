//! Noyau — évaluation (pipeline réel)
//!
//! validation -> conversion postfixe -> évaluation sur pile -> affichage
//!
//! Aucune mémoire entre deux appels : même entrée => même sortie.

use super::erreur::{ErreurCalcul, Rejet};
use super::format::{format_resultat, lecture_decimale};
use super::jetons::{est_espace, format_tokens, Op, Tok};
use super::rpn::convert;
use super::validation::verifier;

/// Démarche affichée par l’interface.
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub entree: String,
    pub postfixe: String,
    pub note: String,
}

/// Évalue une séquence postfixe.
///
/// Pour chaque opérateur, le premier dépilé est l’opérande DROIT.
/// Une division par zéro (y compris -0) arrête tout de suite l’évaluation.
pub fn evaluate(tokens: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match *tok {
            Tok::Num(v) => pile.push(v),
            Tok::Op(op) => {
                let droite = pile.pop().ok_or(Rejet::PostfixeMalforme)?;
                let gauche = pile.pop().ok_or(Rejet::PostfixeMalforme)?;

                let r = match op {
                    Op::Add => gauche + droite,
                    Op::Sub => gauche - droite,
                    Op::Mul => gauche * droite,
                    Op::Div => {
                        if droite == 0.0 {
                            tracing::debug!(gauche, "division par zéro");
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        gauche / droite
                    }
                };
                pile.push(r);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(Rejet::PostfixeMalforme.into()),
    }
}

/// API publique : valide, convertit puis évalue.
#[tracing::instrument(level = "trace")]
pub fn compute(expr: &str) -> Result<f64, ErreurCalcul> {
    if let Err(rejet) = verifier(expr) {
        tracing::debug!(%rejet, "expression refusée");
        return Err(rejet.into());
    }
    evaluate(&convert(expr))
}

/// Démarche d’une expression valide : entrée sans espaces + séquence postfixe.
pub fn demarche(expr: &str) -> Demarche {
    let entree: String = expr.chars().filter(|&c| !est_espace(c)).collect();
    let postfixe = format_tokens(&convert(&entree));
    Demarche {
        entree,
        postfixe,
        note: "Pipeline: validation → postfixe (shunting-yard) → pile → résultat.".into(),
    }
}

/// API de l’interface : passe par [`compute`], puis retourne
/// - l’affichage court du résultat
/// - la lecture décimale à `digits` chiffres : None si le résultat n’est pas fini
/// - la démarche (entrée nettoyée, séquence postfixe)
pub fn eval_expression(
    expr_str: &str,
    digits: usize,
) -> Result<(String, Option<String>, Demarche), ErreurCalcul> {
    let valeur = compute(expr_str)?;
    Ok((
        format_resultat(valeur),
        lecture_decimale(valeur, digits),
        demarche(expr_str),
    ))
}
