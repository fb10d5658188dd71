// src/noyau/jetons.rs
//
// Jetons + classes de caractères partagées par la validation et la conversion.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Reconnaît un caractère opérateur.
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// `*` et `/` passent avant `+` et `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

/// Un jeton de la séquence postfixe.
/// Le nombre est déjà signé et entièrement lu : rien à re-parser en aval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
        }
    }
}

/* ------------------------ Classes de caractères ------------------------ */

pub fn est_espace(c: char) -> bool {
    c == ' '
}

pub fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn est_operateur(c: char) -> bool {
    Op::depuis_char(c).is_some()
}

/// Caractère d’un littéral numérique (chiffre ou point décimal).
pub fn est_numerique(c: char) -> bool {
    est_chiffre(c) || c == '.'
}

/// Alphabet complet accepté en entrée.
pub fn est_autorise(c: char) -> bool {
    est_numerique(c) || est_operateur(c) || est_espace(c)
}

/// Format utilitaire (démarche) : liste de jetons en texte, séparés par des espaces.
///
/// Exemple: `[Num(1), Num(2), Op(Add)]` -> `"1 2 +"`
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
