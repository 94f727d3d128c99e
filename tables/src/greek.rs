//! Spelled-out Greek letter names, used when Greek spelling is requested.
//!
//! Capital letters spell with a leading capital (`Beta`); accented forms and
//! the symbol variants spell as their base letter.

use crate::CodePointMap;

pub static GREEK: CodePointMap = CodePointMap::new(
    "greek",
    &[
        ('\u{00B5}', "mu"), // µ MICRO SIGN
        ('\u{0386}', "Alpha"), // Ά GREEK CAPITAL LETTER ALPHA WITH TONOS
        ('\u{0388}', "Epsilon"), // Έ GREEK CAPITAL LETTER EPSILON WITH TONOS
        ('\u{0389}', "Eta"), // Ή GREEK CAPITAL LETTER ETA WITH TONOS
        ('\u{038A}', "Iota"), // Ί GREEK CAPITAL LETTER IOTA WITH TONOS
        ('\u{038C}', "Omicron"), // Ό GREEK CAPITAL LETTER OMICRON WITH TONOS
        ('\u{038E}', "Upsilon"), // Ύ GREEK CAPITAL LETTER UPSILON WITH TONOS
        ('\u{038F}', "Omega"), // Ώ GREEK CAPITAL LETTER OMEGA WITH TONOS
        ('\u{0390}', "iota"), // ΐ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS
        ('\u{0391}', "Alpha"), // Α GREEK CAPITAL LETTER ALPHA
        ('\u{0392}', "Beta"), // Β GREEK CAPITAL LETTER BETA
        ('\u{0393}', "Gamma"), // Γ GREEK CAPITAL LETTER GAMMA
        ('\u{0394}', "Delta"), // Δ GREEK CAPITAL LETTER DELTA
        ('\u{0395}', "Epsilon"), // Ε GREEK CAPITAL LETTER EPSILON
        ('\u{0396}', "Zeta"), // Ζ GREEK CAPITAL LETTER ZETA
        ('\u{0397}', "Eta"), // Η GREEK CAPITAL LETTER ETA
        ('\u{0398}', "Theta"), // Θ GREEK CAPITAL LETTER THETA
        ('\u{0399}', "Iota"), // Ι GREEK CAPITAL LETTER IOTA
        ('\u{039A}', "Kappa"), // Κ GREEK CAPITAL LETTER KAPPA
        ('\u{039B}', "Lambda"), // Λ GREEK CAPITAL LETTER LAMDA
        ('\u{039C}', "Mu"), // Μ GREEK CAPITAL LETTER MU
        ('\u{039D}', "Nu"), // Ν GREEK CAPITAL LETTER NU
        ('\u{039E}', "Xi"), // Ξ GREEK CAPITAL LETTER XI
        ('\u{039F}', "Omicron"), // Ο GREEK CAPITAL LETTER OMICRON
        ('\u{03A0}', "Pi"), // Π GREEK CAPITAL LETTER PI
        ('\u{03A1}', "Rho"), // Ρ GREEK CAPITAL LETTER RHO
        ('\u{03A3}', "Sigma"), // Σ GREEK CAPITAL LETTER SIGMA
        ('\u{03A4}', "Tau"), // Τ GREEK CAPITAL LETTER TAU
        ('\u{03A5}', "Upsilon"), // Υ GREEK CAPITAL LETTER UPSILON
        ('\u{03A6}', "Phi"), // Φ GREEK CAPITAL LETTER PHI
        ('\u{03A7}', "Chi"), // Χ GREEK CAPITAL LETTER CHI
        ('\u{03A8}', "Psi"), // Ψ GREEK CAPITAL LETTER PSI
        ('\u{03A9}', "Omega"), // Ω GREEK CAPITAL LETTER OMEGA
        ('\u{03AA}', "Iota"), // Ϊ GREEK CAPITAL LETTER IOTA WITH DIALYTIKA
        ('\u{03AB}', "Upsilon"), // Ϋ GREEK CAPITAL LETTER UPSILON WITH DIALYTIKA
        ('\u{03AC}', "alpha"), // ά GREEK SMALL LETTER ALPHA WITH TONOS
        ('\u{03AD}', "epsilon"), // έ GREEK SMALL LETTER EPSILON WITH TONOS
        ('\u{03AE}', "eta"), // ή GREEK SMALL LETTER ETA WITH TONOS
        ('\u{03AF}', "iota"), // ί GREEK SMALL LETTER IOTA WITH TONOS
        ('\u{03B0}', "upsilon"), // ΰ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS
        ('\u{03B1}', "alpha"), // α GREEK SMALL LETTER ALPHA
        ('\u{03B2}', "beta"), // β GREEK SMALL LETTER BETA
        ('\u{03B3}', "gamma"), // γ GREEK SMALL LETTER GAMMA
        ('\u{03B4}', "delta"), // δ GREEK SMALL LETTER DELTA
        ('\u{03B5}', "epsilon"), // ε GREEK SMALL LETTER EPSILON
        ('\u{03B6}', "zeta"), // ζ GREEK SMALL LETTER ZETA
        ('\u{03B7}', "eta"), // η GREEK SMALL LETTER ETA
        ('\u{03B8}', "theta"), // θ GREEK SMALL LETTER THETA
        ('\u{03B9}', "iota"), // ι GREEK SMALL LETTER IOTA
        ('\u{03BA}', "kappa"), // κ GREEK SMALL LETTER KAPPA
        ('\u{03BB}', "lambda"), // λ GREEK SMALL LETTER LAMDA
        ('\u{03BC}', "mu"), // μ GREEK SMALL LETTER MU
        ('\u{03BD}', "nu"), // ν GREEK SMALL LETTER NU
        ('\u{03BE}', "xi"), // ξ GREEK SMALL LETTER XI
        ('\u{03BF}', "omicron"), // ο GREEK SMALL LETTER OMICRON
        ('\u{03C0}', "pi"), // π GREEK SMALL LETTER PI
        ('\u{03C1}', "rho"), // ρ GREEK SMALL LETTER RHO
        ('\u{03C2}', "sigma"), // ς GREEK SMALL LETTER FINAL SIGMA
        ('\u{03C3}', "sigma"), // σ GREEK SMALL LETTER SIGMA
        ('\u{03C4}', "tau"), // τ GREEK SMALL LETTER TAU
        ('\u{03C5}', "upsilon"), // υ GREEK SMALL LETTER UPSILON
        ('\u{03C6}', "phi"), // φ GREEK SMALL LETTER PHI
        ('\u{03C7}', "chi"), // χ GREEK SMALL LETTER CHI
        ('\u{03C8}', "psi"), // ψ GREEK SMALL LETTER PSI
        ('\u{03C9}', "omega"), // ω GREEK SMALL LETTER OMEGA
        ('\u{03CA}', "iota"), // ϊ GREEK SMALL LETTER IOTA WITH DIALYTIKA
        ('\u{03CB}', "upsilon"), // ϋ GREEK SMALL LETTER UPSILON WITH DIALYTIKA
        ('\u{03CC}', "omicron"), // ό GREEK SMALL LETTER OMICRON WITH TONOS
        ('\u{03CD}', "upsilon"), // ύ GREEK SMALL LETTER UPSILON WITH TONOS
        ('\u{03CE}', "omega"), // ώ GREEK SMALL LETTER OMEGA WITH TONOS
        ('\u{03D0}', "beta"), // ϐ GREEK BETA SYMBOL
        ('\u{03D1}', "theta"), // ϑ GREEK THETA SYMBOL
        ('\u{03D2}', "upsilon"), // ϒ GREEK UPSILON WITH HOOK SYMBOL
        ('\u{03D3}', "upsilon"), // ϓ GREEK UPSILON WITH ACUTE AND HOOK SYMBOL
        ('\u{03D4}', "upsilon"), // ϔ GREEK UPSILON WITH DIAERESIS AND HOOK SYMBOL
        ('\u{03D5}', "phi"), // ϕ GREEK PHI SYMBOL
        ('\u{03D6}', "pi"), // ϖ GREEK PI SYMBOL
        ('\u{03F0}', "kappa"), // ϰ GREEK KAPPA SYMBOL
        ('\u{03F1}', "rho"), // ϱ GREEK RHO SYMBOL
        ('\u{03F2}', "sigma"), // ϲ GREEK LUNATE SIGMA SYMBOL
        ('\u{03F4}', "Theta"), // ϴ GREEK CAPITAL THETA SYMBOL
        ('\u{03F5}', "epsilon"), // ϵ GREEK LUNATE EPSILON SYMBOL
        ('\u{03F9}', "Sigma"), // Ϲ GREEK CAPITAL LUNATE SIGMA SYMBOL
        ('\u{03FC}', "rho"), // ϼ GREEK RHO WITH STROKE SYMBOL
        ('\u{1D5D}', "beta"), // ᵝ MODIFIER LETTER SMALL BETA
        ('\u{1D5F}', "delta"), // ᵟ MODIFIER LETTER SMALL DELTA
        ('\u{1D61}', "chi"), // ᵡ MODIFIER LETTER SMALL CHI
        ('\u{1D66}', "beta"), // ᵦ GREEK SUBSCRIPT SMALL LETTER BETA
        ('\u{1D67}', "gamma"), // ᵧ GREEK SUBSCRIPT SMALL LETTER GAMMA
        ('\u{1D68}', "rho"), // ᵨ GREEK SUBSCRIPT SMALL LETTER RHO
        ('\u{1D69}', "phi"), // ᵩ GREEK SUBSCRIPT SMALL LETTER PHI
        ('\u{1D6A}', "chi"), // ᵪ GREEK SUBSCRIPT SMALL LETTER CHI
        ('\u{1F00}', "alpha"), // ἀ GREEK SMALL LETTER ALPHA WITH PSILI
        ('\u{1F01}', "alpha"), // ἁ GREEK SMALL LETTER ALPHA WITH DASIA
        ('\u{1F02}', "alpha"), // ἂ GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA
        ('\u{1F03}', "alpha"), // ἃ GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA
        ('\u{1F04}', "alpha"), // ἄ GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA
        ('\u{1F05}', "alpha"), // ἅ GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA
        ('\u{1F06}', "alpha"), // ἆ GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI
        ('\u{1F07}', "alpha"), // ἇ GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI
        ('\u{1F08}', "Alpha"), // Ἀ GREEK CAPITAL LETTER ALPHA WITH PSILI
        ('\u{1F09}', "Alpha"), // Ἁ GREEK CAPITAL LETTER ALPHA WITH DASIA
        ('\u{1F0A}', "Alpha"), // Ἂ GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA
        ('\u{1F0B}', "Alpha"), // Ἃ GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA
        ('\u{1F0C}', "Alpha"), // Ἄ GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA
        ('\u{1F0D}', "Alpha"), // Ἅ GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA
        ('\u{1F0E}', "Alpha"), // Ἆ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI
        ('\u{1F0F}', "Alpha"), // Ἇ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI
        ('\u{1F10}', "epsilon"), // ἐ GREEK SMALL LETTER EPSILON WITH PSILI
        ('\u{1F11}', "epsilon"), // ἑ GREEK SMALL LETTER EPSILON WITH DASIA
        ('\u{1F12}', "epsilon"), // ἒ GREEK SMALL LETTER EPSILON WITH PSILI AND VARIA
        ('\u{1F13}', "epsilon"), // ἓ GREEK SMALL LETTER EPSILON WITH DASIA AND VARIA
        ('\u{1F14}', "epsilon"), // ἔ GREEK SMALL LETTER EPSILON WITH PSILI AND OXIA
        ('\u{1F15}', "epsilon"), // ἕ GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA
        ('\u{1F18}', "Epsilon"), // Ἐ GREEK CAPITAL LETTER EPSILON WITH PSILI
        ('\u{1F19}', "Epsilon"), // Ἑ GREEK CAPITAL LETTER EPSILON WITH DASIA
        ('\u{1F1A}', "Epsilon"), // Ἒ GREEK CAPITAL LETTER EPSILON WITH PSILI AND VARIA
        ('\u{1F1B}', "Epsilon"), // Ἓ GREEK CAPITAL LETTER EPSILON WITH DASIA AND VARIA
        ('\u{1F1C}', "Epsilon"), // Ἔ GREEK CAPITAL LETTER EPSILON WITH PSILI AND OXIA
        ('\u{1F1D}', "Epsilon"), // Ἕ GREEK CAPITAL LETTER EPSILON WITH DASIA AND OXIA
        ('\u{1F20}', "eta"), // ἠ GREEK SMALL LETTER ETA WITH PSILI
        ('\u{1F21}', "eta"), // ἡ GREEK SMALL LETTER ETA WITH DASIA
        ('\u{1F22}', "eta"), // ἢ GREEK SMALL LETTER ETA WITH PSILI AND VARIA
        ('\u{1F23}', "eta"), // ἣ GREEK SMALL LETTER ETA WITH DASIA AND VARIA
        ('\u{1F24}', "eta"), // ἤ GREEK SMALL LETTER ETA WITH PSILI AND OXIA
        ('\u{1F25}', "eta"), // ἥ GREEK SMALL LETTER ETA WITH DASIA AND OXIA
        ('\u{1F26}', "eta"), // ἦ GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI
        ('\u{1F27}', "eta"), // ἧ GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI
        ('\u{1F28}', "Eta"), // Ἠ GREEK CAPITAL LETTER ETA WITH PSILI
        ('\u{1F29}', "Eta"), // Ἡ GREEK CAPITAL LETTER ETA WITH DASIA
        ('\u{1F2A}', "Eta"), // Ἢ GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA
        ('\u{1F2B}', "Eta"), // Ἣ GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA
        ('\u{1F2C}', "Eta"), // Ἤ GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA
        ('\u{1F2D}', "Eta"), // Ἥ GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA
        ('\u{1F2E}', "Eta"), // Ἦ GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI
        ('\u{1F2F}', "Eta"), // Ἧ GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI
        ('\u{1F30}', "iota"), // ἰ GREEK SMALL LETTER IOTA WITH PSILI
        ('\u{1F31}', "iota"), // ἱ GREEK SMALL LETTER IOTA WITH DASIA
        ('\u{1F32}', "iota"), // ἲ GREEK SMALL LETTER IOTA WITH PSILI AND VARIA
        ('\u{1F33}', "iota"), // ἳ GREEK SMALL LETTER IOTA WITH DASIA AND VARIA
        ('\u{1F34}', "iota"), // ἴ GREEK SMALL LETTER IOTA WITH PSILI AND OXIA
        ('\u{1F35}', "iota"), // ἵ GREEK SMALL LETTER IOTA WITH DASIA AND OXIA
        ('\u{1F36}', "iota"), // ἶ GREEK SMALL LETTER IOTA WITH PSILI AND PERISPOMENI
        ('\u{1F37}', "iota"), // ἷ GREEK SMALL LETTER IOTA WITH DASIA AND PERISPOMENI
        ('\u{1F38}', "Iota"), // Ἰ GREEK CAPITAL LETTER IOTA WITH PSILI
        ('\u{1F39}', "Iota"), // Ἱ GREEK CAPITAL LETTER IOTA WITH DASIA
        ('\u{1F3A}', "Iota"), // Ἲ GREEK CAPITAL LETTER IOTA WITH PSILI AND VARIA
        ('\u{1F3B}', "Iota"), // Ἳ GREEK CAPITAL LETTER IOTA WITH DASIA AND VARIA
        ('\u{1F3C}', "Iota"), // Ἴ GREEK CAPITAL LETTER IOTA WITH PSILI AND OXIA
        ('\u{1F3D}', "Iota"), // Ἵ GREEK CAPITAL LETTER IOTA WITH DASIA AND OXIA
        ('\u{1F3E}', "Iota"), // Ἶ GREEK CAPITAL LETTER IOTA WITH PSILI AND PERISPOMENI
        ('\u{1F3F}', "Iota"), // Ἷ GREEK CAPITAL LETTER IOTA WITH DASIA AND PERISPOMENI
        ('\u{1F40}', "omicron"), // ὀ GREEK SMALL LETTER OMICRON WITH PSILI
        ('\u{1F41}', "omicron"), // ὁ GREEK SMALL LETTER OMICRON WITH DASIA
        ('\u{1F42}', "omicron"), // ὂ GREEK SMALL LETTER OMICRON WITH PSILI AND VARIA
        ('\u{1F43}', "omicron"), // ὃ GREEK SMALL LETTER OMICRON WITH DASIA AND VARIA
        ('\u{1F44}', "omicron"), // ὄ GREEK SMALL LETTER OMICRON WITH PSILI AND OXIA
        ('\u{1F45}', "omicron"), // ὅ GREEK SMALL LETTER OMICRON WITH DASIA AND OXIA
        ('\u{1F48}', "Omicron"), // Ὀ GREEK CAPITAL LETTER OMICRON WITH PSILI
        ('\u{1F49}', "Omicron"), // Ὁ GREEK CAPITAL LETTER OMICRON WITH DASIA
        ('\u{1F4A}', "Omicron"), // Ὂ GREEK CAPITAL LETTER OMICRON WITH PSILI AND VARIA
        ('\u{1F4B}', "Omicron"), // Ὃ GREEK CAPITAL LETTER OMICRON WITH DASIA AND VARIA
        ('\u{1F4C}', "Omicron"), // Ὄ GREEK CAPITAL LETTER OMICRON WITH PSILI AND OXIA
        ('\u{1F4D}', "Omicron"), // Ὅ GREEK CAPITAL LETTER OMICRON WITH DASIA AND OXIA
        ('\u{1F50}', "upsilon"), // ὐ GREEK SMALL LETTER UPSILON WITH PSILI
        ('\u{1F51}', "upsilon"), // ὑ GREEK SMALL LETTER UPSILON WITH DASIA
        ('\u{1F52}', "upsilon"), // ὒ GREEK SMALL LETTER UPSILON WITH PSILI AND VARIA
        ('\u{1F53}', "upsilon"), // ὓ GREEK SMALL LETTER UPSILON WITH DASIA AND VARIA
        ('\u{1F54}', "upsilon"), // ὔ GREEK SMALL LETTER UPSILON WITH PSILI AND OXIA
        ('\u{1F55}', "upsilon"), // ὕ GREEK SMALL LETTER UPSILON WITH DASIA AND OXIA
        ('\u{1F56}', "upsilon"), // ὖ GREEK SMALL LETTER UPSILON WITH PSILI AND PERISPOMENI
        ('\u{1F57}', "upsilon"), // ὗ GREEK SMALL LETTER UPSILON WITH DASIA AND PERISPOMENI
        ('\u{1F59}', "Upsilon"), // Ὑ GREEK CAPITAL LETTER UPSILON WITH DASIA
        ('\u{1F5B}', "Upsilon"), // Ὓ GREEK CAPITAL LETTER UPSILON WITH DASIA AND VARIA
        ('\u{1F5D}', "Upsilon"), // Ὕ GREEK CAPITAL LETTER UPSILON WITH DASIA AND OXIA
        ('\u{1F5F}', "Upsilon"), // Ὗ GREEK CAPITAL LETTER UPSILON WITH DASIA AND PERISPOMENI
        ('\u{1F60}', "omega"), // ὠ GREEK SMALL LETTER OMEGA WITH PSILI
        ('\u{1F61}', "omega"), // ὡ GREEK SMALL LETTER OMEGA WITH DASIA
        ('\u{1F62}', "omega"), // ὢ GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA
        ('\u{1F63}', "omega"), // ὣ GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA
        ('\u{1F64}', "omega"), // ὤ GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA
        ('\u{1F65}', "omega"), // ὥ GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA
        ('\u{1F66}', "omega"), // ὦ GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI
        ('\u{1F67}', "omega"), // ὧ GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI
        ('\u{1F68}', "Omega"), // Ὠ GREEK CAPITAL LETTER OMEGA WITH PSILI
        ('\u{1F69}', "Omega"), // Ὡ GREEK CAPITAL LETTER OMEGA WITH DASIA
        ('\u{1F6A}', "Omega"), // Ὢ GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA
        ('\u{1F6B}', "Omega"), // Ὣ GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA
        ('\u{1F6C}', "Omega"), // Ὤ GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA
        ('\u{1F6D}', "Omega"), // Ὥ GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA
        ('\u{1F6E}', "Omega"), // Ὦ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI
        ('\u{1F6F}', "Omega"), // Ὧ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI
        ('\u{1F70}', "alpha"), // ὰ GREEK SMALL LETTER ALPHA WITH VARIA
        ('\u{1F71}', "alpha"), // ά GREEK SMALL LETTER ALPHA WITH OXIA
        ('\u{1F72}', "epsilon"), // ὲ GREEK SMALL LETTER EPSILON WITH VARIA
        ('\u{1F73}', "epsilon"), // έ GREEK SMALL LETTER EPSILON WITH OXIA
        ('\u{1F74}', "eta"), // ὴ GREEK SMALL LETTER ETA WITH VARIA
        ('\u{1F75}', "eta"), // ή GREEK SMALL LETTER ETA WITH OXIA
        ('\u{1F76}', "iota"), // ὶ GREEK SMALL LETTER IOTA WITH VARIA
        ('\u{1F77}', "iota"), // ί GREEK SMALL LETTER IOTA WITH OXIA
        ('\u{1F78}', "omicron"), // ὸ GREEK SMALL LETTER OMICRON WITH VARIA
        ('\u{1F79}', "omicron"), // ό GREEK SMALL LETTER OMICRON WITH OXIA
        ('\u{1F7A}', "upsilon"), // ὺ GREEK SMALL LETTER UPSILON WITH VARIA
        ('\u{1F7B}', "upsilon"), // ύ GREEK SMALL LETTER UPSILON WITH OXIA
        ('\u{1F7C}', "omega"), // ὼ GREEK SMALL LETTER OMEGA WITH VARIA
        ('\u{1F7D}', "omega"), // ώ GREEK SMALL LETTER OMEGA WITH OXIA
        ('\u{1F80}', "alpha"), // ᾀ GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1F81}', "alpha"), // ᾁ GREEK SMALL LETTER ALPHA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1F82}', "alpha"), // ᾂ GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1F83}', "alpha"), // ᾃ GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1F84}', "alpha"), // ᾄ GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1F85}', "alpha"), // ᾅ GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1F86}', "alpha"), // ᾆ GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F87}', "alpha"), // ᾇ GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F88}', "Alpha"), // ᾈ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1F89}', "Alpha"), // ᾉ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1F8A}', "Alpha"), // ᾊ GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1F8B}', "Alpha"), // ᾋ GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1F8C}', "Alpha"), // ᾌ GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1F8D}', "Alpha"), // ᾍ GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1F8E}', "Alpha"), // ᾎ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F8F}', "Alpha"), // ᾏ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F90}', "eta"), // ᾐ GREEK SMALL LETTER ETA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1F91}', "eta"), // ᾑ GREEK SMALL LETTER ETA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1F92}', "eta"), // ᾒ GREEK SMALL LETTER ETA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1F93}', "eta"), // ᾓ GREEK SMALL LETTER ETA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1F94}', "eta"), // ᾔ GREEK SMALL LETTER ETA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1F95}', "eta"), // ᾕ GREEK SMALL LETTER ETA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1F96}', "eta"), // ᾖ GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F97}', "eta"), // ᾗ GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F98}', "Eta"), // ᾘ GREEK CAPITAL LETTER ETA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1F99}', "Eta"), // ᾙ GREEK CAPITAL LETTER ETA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1F9A}', "Eta"), // ᾚ GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1F9B}', "Eta"), // ᾛ GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1F9C}', "Eta"), // ᾜ GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1F9D}', "Eta"), // ᾝ GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1F9E}', "Eta"), // ᾞ GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F9F}', "Eta"), // ᾟ GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FA0}', "omega"), // ᾠ GREEK SMALL LETTER OMEGA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1FA1}', "omega"), // ᾡ GREEK SMALL LETTER OMEGA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1FA2}', "omega"), // ᾢ GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1FA3}', "omega"), // ᾣ GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1FA4}', "omega"), // ᾤ GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1FA5}', "omega"), // ᾥ GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1FA6}', "omega"), // ᾦ GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FA7}', "omega"), // ᾧ GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FA8}', "Omega"), // ᾨ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1FA9}', "Omega"), // ᾩ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1FAA}', "Omega"), // ᾪ GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1FAB}', "Omega"), // ᾫ GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1FAC}', "Omega"), // ᾬ GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1FAD}', "Omega"), // ᾭ GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1FAE}', "Omega"), // ᾮ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FAF}', "Omega"), // ᾯ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FB0}', "alpha"), // ᾰ GREEK SMALL LETTER ALPHA WITH VRACHY
        ('\u{1FB1}', "alpha"), // ᾱ GREEK SMALL LETTER ALPHA WITH MACRON
        ('\u{1FB2}', "alpha"), // ᾲ GREEK SMALL LETTER ALPHA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FB3}', "alpha"), // ᾳ GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI
        ('\u{1FB4}', "alpha"), // ᾴ GREEK SMALL LETTER ALPHA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FB6}', "alpha"), // ᾶ GREEK SMALL LETTER ALPHA WITH PERISPOMENI
        ('\u{1FB7}', "alpha"), // ᾷ GREEK SMALL LETTER ALPHA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FB8}', "Alpha"), // Ᾰ GREEK CAPITAL LETTER ALPHA WITH VRACHY
        ('\u{1FB9}', "Alpha"), // Ᾱ GREEK CAPITAL LETTER ALPHA WITH MACRON
        ('\u{1FBA}', "Alpha"), // Ὰ GREEK CAPITAL LETTER ALPHA WITH VARIA
        ('\u{1FBB}', "Alpha"), // Ά GREEK CAPITAL LETTER ALPHA WITH OXIA
        ('\u{1FBC}', "Alpha"), // ᾼ GREEK CAPITAL LETTER ALPHA WITH PROSGEGRAMMENI
        ('\u{1FC2}', "eta"), // ῂ GREEK SMALL LETTER ETA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FC3}', "eta"), // ῃ GREEK SMALL LETTER ETA WITH YPOGEGRAMMENI
        ('\u{1FC4}', "eta"), // ῄ GREEK SMALL LETTER ETA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FC6}', "eta"), // ῆ GREEK SMALL LETTER ETA WITH PERISPOMENI
        ('\u{1FC7}', "eta"), // ῇ GREEK SMALL LETTER ETA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FC8}', "Epsilon"), // Ὲ GREEK CAPITAL LETTER EPSILON WITH VARIA
        ('\u{1FC9}', "Epsilon"), // Έ GREEK CAPITAL LETTER EPSILON WITH OXIA
        ('\u{1FCA}', "Eta"), // Ὴ GREEK CAPITAL LETTER ETA WITH VARIA
        ('\u{1FCB}', "Eta"), // Ή GREEK CAPITAL LETTER ETA WITH OXIA
        ('\u{1FCC}', "Eta"), // ῌ GREEK CAPITAL LETTER ETA WITH PROSGEGRAMMENI
        ('\u{1FD0}', "iota"), // ῐ GREEK SMALL LETTER IOTA WITH VRACHY
        ('\u{1FD1}', "iota"), // ῑ GREEK SMALL LETTER IOTA WITH MACRON
        ('\u{1FD2}', "iota"), // ῒ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND VARIA
        ('\u{1FD3}', "iota"), // ΐ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND OXIA
        ('\u{1FD6}', "iota"), // ῖ GREEK SMALL LETTER IOTA WITH PERISPOMENI
        ('\u{1FD7}', "iota"), // ῗ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND PERISPOMENI
        ('\u{1FD8}', "Iota"), // Ῐ GREEK CAPITAL LETTER IOTA WITH VRACHY
        ('\u{1FD9}', "Iota"), // Ῑ GREEK CAPITAL LETTER IOTA WITH MACRON
        ('\u{1FDA}', "Iota"), // Ὶ GREEK CAPITAL LETTER IOTA WITH VARIA
        ('\u{1FDB}', "Iota"), // Ί GREEK CAPITAL LETTER IOTA WITH OXIA
        ('\u{1FE0}', "upsilon"), // ῠ GREEK SMALL LETTER UPSILON WITH VRACHY
        ('\u{1FE1}', "upsilon"), // ῡ GREEK SMALL LETTER UPSILON WITH MACRON
        ('\u{1FE2}', "upsilon"), // ῢ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND VARIA
        ('\u{1FE3}', "upsilon"), // ΰ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND OXIA
        ('\u{1FE4}', "rho"), // ῤ GREEK SMALL LETTER RHO WITH PSILI
        ('\u{1FE5}', "rho"), // ῥ GREEK SMALL LETTER RHO WITH DASIA
        ('\u{1FE6}', "upsilon"), // ῦ GREEK SMALL LETTER UPSILON WITH PERISPOMENI
        ('\u{1FE7}', "upsilon"), // ῧ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND PERISPOMENI
        ('\u{1FE8}', "Upsilon"), // Ῠ GREEK CAPITAL LETTER UPSILON WITH VRACHY
        ('\u{1FE9}', "Upsilon"), // Ῡ GREEK CAPITAL LETTER UPSILON WITH MACRON
        ('\u{1FEA}', "Upsilon"), // Ὺ GREEK CAPITAL LETTER UPSILON WITH VARIA
        ('\u{1FEB}', "Upsilon"), // Ύ GREEK CAPITAL LETTER UPSILON WITH OXIA
        ('\u{1FEC}', "Rho"), // Ῥ GREEK CAPITAL LETTER RHO WITH DASIA
        ('\u{1FF2}', "omega"), // ῲ GREEK SMALL LETTER OMEGA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FF3}', "omega"), // ῳ GREEK SMALL LETTER OMEGA WITH YPOGEGRAMMENI
        ('\u{1FF4}', "omega"), // ῴ GREEK SMALL LETTER OMEGA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FF6}', "omega"), // ῶ GREEK SMALL LETTER OMEGA WITH PERISPOMENI
        ('\u{1FF7}', "omega"), // ῷ GREEK SMALL LETTER OMEGA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FF8}', "Omicron"), // Ὸ GREEK CAPITAL LETTER OMICRON WITH VARIA
        ('\u{1FF9}', "Omicron"), // Ό GREEK CAPITAL LETTER OMICRON WITH OXIA
        ('\u{1FFA}', "Omega"), // Ὼ GREEK CAPITAL LETTER OMEGA WITH VARIA
        ('\u{1FFB}', "Omega"), // Ώ GREEK CAPITAL LETTER OMEGA WITH OXIA
        ('\u{1FFC}', "Omega"), // ῼ GREEK CAPITAL LETTER OMEGA WITH PROSGEGRAMMENI
    ],
);
