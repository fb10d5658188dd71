// src/noyau/format.rs
//
// Affichage des résultats f64 :
// - forme courte (plus court texte qui relit la même valeur)
// - lecture décimale à nombre de chiffres fixé (None si non fini)

/// Forme courte : "49", "0.35", "-0.6666666666666666", "∞".
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Lecture décimale avec exactement `digits` chiffres après la virgule (arrondi).
/// None si la valeur n’est pas finie : rien à lire.
pub fn lecture_decimale(v: f64, digits: usize) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    let v = if v == 0.0 { 0.0 } else { v };
    Some(format!("{v:.digits$}"))
}
