//! Corpus de référence : expressions attendues valides (avec leur valeur) et
//! expressions qui doivent être refusées avant toute évaluation.

use super::erreur::ErreurCalcul;
use super::eval::compute;
use super::is_valid;

fn assert_calcule(expr: &str, attendu: f64) {
    assert!(is_valid(expr), "marquée invalide : {expr:?}");
    let v = compute(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

#[test]
fn corpus_valeurs() {
    assert_calcule("2+2", 4.0); // addition
    assert_calcule("9*8", 72.0); // multiplication
    assert_calcule("144/12", 12.0); // division
    assert_calcule("100-101", -1.0); // soustraction
    assert_calcule("10+-9", 1.0); // nombres négatifs
    assert_calcule(".1+.25", 0.35); // décimales sans partie entière
    assert_calcule("49", 49.0); // identité
    assert_calcule("2*3*-4", -24.0); // plusieurs opérateurs
    assert_calcule("3/2+1/3", 3.0 / 2.0 + 1.0 / 3.0); // fractions
    assert_calcule("100-100/100", 99.0); // ordre des opérations
    assert_calcule("-2/-3", 2.0 / 3.0); // négatifs multiples
    assert_calcule("1/2+9/8*.5", 1.0625); // fractions et décimales
}

#[test]
fn corpus_valeurs_exactes() {
    // Valeurs représentables exactement : égalité stricte attendue.
    assert_eq!(compute("100-100/100"), Ok(99.0));
    assert_eq!(compute("10+-9"), Ok(1.0));
    assert_eq!(compute("49"), Ok(49.0));
    assert_eq!(compute("1/2+9/8*.5"), Ok(1.0625));
}

#[test]
fn corpus_refus() {
    let refus = [
        "one/zero",   // nombres écrits en lettres
        "1+3+",       // opérande manquant
        "+3+7",       // opérande manquant
        "1.04.2 + 7", // décimal invalide
        ".+17",       // point sans chiffre
        "1**3",
        "1*/3",
        "1*+3",
        "1/*3",
        "1//3",
        "1/+3",
        "1+*3",
        "1+/3",
        "1++3",
        "1-*3",
        "1-/3",
        "1-+3",
    ];

    for expr in refus {
        assert!(!is_valid(expr), "détectée valide : {expr:?}");
        assert!(
            matches!(compute(expr), Err(ErreurCalcul::Invalide(_))),
            "compute doit refuser {expr:?}"
        );
    }
}

#[test]
fn corpus_division_par_zero() {
    assert_eq!(compute("1/0"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(compute("2+3/0*4"), Err(ErreurCalcul::DivisionParZero));
    // le zéro arrive par calcul : pas une division par zéro
    assert_eq!(compute("1/2-0.5"), Ok(0.0));
}
