//! Tests fuzz safe : robustesse + déterminisme, via proptest.
//!
//! - expressions valides générées : jamais "Invalide", valeur identique à un
//!   calcul de référence (produits d’abord, puis sommes, de gauche à droite)
//! - chaînes quelconques sur l’alphabet : aucune panique, et compute refuse
//!   exactement ce que is_valid refuse
//! - invariant clé : une séquence mal formée ne sort jamais de compute

use proptest::prelude::*;

use super::erreur::{ErreurCalcul, Rejet};
use super::eval::compute;
use super::is_valid;

/* ------------------------ Génération d’expressions ------------------------ */

/// Nombre signé (moins unaires enchaînés) : texte + valeur attendue.
fn nombre() -> impl Strategy<Value = (String, f64)> {
    (
        0usize..4,
        0u32..10_000,
        // décimales courtes, ou très longues (plus de 308 chiffres)
        prop::option::of("[0-9]{1,4}|[0-9]{310,330}"),
        any::<bool>(),
    )
        .prop_map(|(moins, entier, frac, sans_entier)| {
            let corps = match frac {
                Some(f) if sans_entier => format!(".{f}"),
                Some(f) => format!("{entier}.{f}"),
                None => entier.to_string(),
            };
            let mut v: f64 = corps.parse().unwrap();
            if moins % 2 == 1 {
                v = -v;
            }
            (format!("{}{corps}", "-".repeat(moins)), v)
        })
}

fn operateur() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

/// Valeur de référence, sans passer par la forme postfixe.
fn reference(premier: f64, suite: &[(char, f64)]) -> Result<f64, ErreurCalcul> {
    let mut termes = vec![premier];
    let mut signes = Vec::new();

    for &(op, v) in suite {
        match op {
            '*' => *termes.last_mut().unwrap() *= v,
            '/' => {
                if v == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                *termes.last_mut().unwrap() /= v;
            }
            s => {
                signes.push(s);
                termes.push(v);
            }
        }
    }

    let mut acc = termes[0];
    for (s, t) in signes.iter().zip(&termes[1..]) {
        acc = if *s == '+' { acc + t } else { acc - t };
    }
    Ok(acc)
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn fuzz_safe_expressions_generees(
        premier in nombre(),
        suite in prop::collection::vec((operateur(), nombre()), 0..8),
        espaces in any::<bool>()
    ) {
        let sep = if espaces { " " } else { "" };
        let mut expr = premier.0.clone();
        for (op, (texte, _)) in &suite {
            expr.push_str(&format!("{sep}{op}{sep}{texte}"));
        }

        prop_assert!(is_valid(&expr), "refusée : {:?}", expr);

        let valeurs: Vec<(char, f64)> = suite.iter().map(|(op, (_, v))| (*op, *v)).collect();
        let attendu = reference(premier.1, &valeurs);
        let obtenu = compute(&expr);

        prop_assert_eq!(obtenu, attendu, "expr={:?}", expr);
        // déterminisme
        prop_assert_eq!(compute(&expr), obtenu);
    }

    #[test]
    fn fuzz_safe_alphabet_quelconque(expr in "[0-9.+*/ -]{0,16}") {
        match compute(&expr) {
            Ok(_) | Err(ErreurCalcul::DivisionParZero) => prop_assert!(is_valid(&expr)),
            Err(ErreurCalcul::Invalide(rejet)) => {
                prop_assert!(!is_valid(&expr));
                prop_assert_ne!(rejet, Rejet::PostfixeMalforme, "expr={:?}", expr);
            }
        }
    }

    #[test]
    fn fuzz_safe_texte_libre(expr in "\\PC{0,24}") {
        // aucune panique, même hors alphabet
        let _ = compute(&expr);
    }
}

/* ------------------------ Limites ------------------------ */

#[test]
fn fuzz_safe_longue_somme() {
    let expr = vec!["1"; 10_000].join("+");
    assert_eq!(compute(&expr), Ok(10_000.0));
}

#[test]
fn fuzz_safe_longue_chaine_de_moins() {
    // 1001 moins unaires : impair => négatif
    let expr = format!("{}7", "-".repeat(1001));
    assert_eq!(compute(&expr), Ok(-7.0));
}
