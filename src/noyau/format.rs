// src/noyau/format.rs
//
// Affichage des résultats.

/// Texte affiché pour toute erreur d’évaluation.
pub const ERREUR_AFFICHAGE: &str = "Error";

/// Valeur lisible : ".0" conservé pour les entiers (11.0), forme la plus
/// courte sinon (2.5, 0.30000000000000004).
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Debug de f64 garde toujours un point ou un exposant (11.0, 1e20)
    format!("{v:?}")
}

/// "<expression> = <valeur>"
pub fn format_resultat(expression: &str, v: f64) -> String {
    format!("{} = {}", expression.trim_end(), format_valeur(v))
}
