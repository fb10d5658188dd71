// src/noyau/erreur.rs
//
// Deux issues d’erreur seulement : Invalide (avant conversion) et DivisionParZero (évaluation).

use thiserror::Error;

/// Raison précise d’un rejet par la validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejet {
    #[error("expression vide")]
    Vide,

    #[error("caractère interdit '{c}' (position {position})")]
    CaractereInterdit { c: char, position: usize },

    #[error("l’expression ne peut pas commencer par '{0}'")]
    OperateurInitial(char),

    #[error("l’expression ne peut pas finir par '{0}'")]
    OperateurFinal(char),

    #[error("opérateurs consécutifs \"{0}{1}\"")]
    OperateursConsecutifs(char, char),

    #[error("point décimal sans chiffre")]
    PointIsole,

    #[error("plusieurs points décimaux dans un même nombre")]
    PointsMultiples,

    // Jamais produit par compute : la conversion ne sort que des séquences bien formées.
    #[error("séquence postfixe mal formée")]
    PostfixeMalforme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expression invalide : {0}")]
    Invalide(#[from] Rejet),

    #[error("division par zéro")]
    DivisionParZero,
}
