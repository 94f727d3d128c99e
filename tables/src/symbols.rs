//! Punctuation, spacing, currency, letterlike, arrow, and math symbols.
//!
//! Word-like expansions carry surrounding spaces so they do not fuse with
//! adjacent tokens.

use crate::CodePointMap;

pub static SYMBOLS: CodePointMap = CodePointMap::new(
    "symbols",
    &[
        ('\u{00A0}', " "), // NO-BREAK SPACE
        ('\u{00A1}', "!"), // ¡ INVERTED EXCLAMATION MARK
        ('\u{00A2}', "c"), // ¢ CENT SIGN
        ('\u{00A3}', "GBP"), // £ POUND SIGN
        ('\u{00A4}', ""), // ¤ CURRENCY SIGN
        ('\u{00A5}', "JPY"), // ¥ YEN SIGN
        ('\u{00A6}', "|"), // ¦ BROKEN BAR
        ('\u{00A7}', " section "), // § SECTION SIGN
        ('\u{00A8}', ""), // ¨ DIAERESIS
        ('\u{00A9}', "(C)"), // © COPYRIGHT SIGN
        ('\u{00AB}', "<<"), // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
        ('\u{00AC}', "!"), // ¬ NOT SIGN
        ('\u{00AD}', ""), // SOFT HYPHEN
        ('\u{00AE}', "(R)"), // ® REGISTERED SIGN
        ('\u{00AF}', "-"), // ¯ MACRON
        ('\u{00B0}', " deg "), // ° DEGREE SIGN
        ('\u{00B1}', "+/-"), // ± PLUS-MINUS SIGN
        ('\u{00B2}', "2"), // ² SUPERSCRIPT TWO
        ('\u{00B3}', "3"), // ³ SUPERSCRIPT THREE
        ('\u{00B4}', "'"), // ´ ACUTE ACCENT
        ('\u{00B6}', " para "), // ¶ PILCROW SIGN
        ('\u{00B7}', "."), // · MIDDLE DOT
        ('\u{00B8}', ","), // ¸ CEDILLA
        ('\u{00B9}', "1"), // ¹ SUPERSCRIPT ONE
        ('\u{00BB}', ">>"), // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
        ('\u{00BC}', " 1/4 "), // ¼ VULGAR FRACTION ONE QUARTER
        ('\u{00BD}', " 1/2 "), // ½ VULGAR FRACTION ONE HALF
        ('\u{00BE}', " 3/4 "), // ¾ VULGAR FRACTION THREE QUARTERS
        ('\u{00BF}', "?"), // ¿ INVERTED QUESTION MARK
        ('\u{00D7}', "x"), // × MULTIPLICATION SIGN
        ('\u{00F7}', "/"), // ÷ DIVISION SIGN
        ('\u{02BC}', "'"), // ʼ MODIFIER LETTER APOSTROPHE
        ('\u{02C6}', "^"), // ˆ MODIFIER LETTER CIRCUMFLEX ACCENT
        ('\u{02C7}', ""), // ˇ CARON
        ('\u{02D8}', ""), // ˘ BREVE
        ('\u{02D9}', ""), // ˙ DOT ABOVE
        ('\u{02DA}', ""), // ˚ RING ABOVE
        ('\u{02DB}', ""), // ˛ OGONEK
        ('\u{02DC}', "~"), // ˜ SMALL TILDE
        ('\u{02DD}', "\""), // ˝ DOUBLE ACUTE ACCENT
        ('\u{2010}', "-"), // ‐ HYPHEN
        ('\u{2011}', "-"), // ‑ NON-BREAKING HYPHEN
        ('\u{2012}', "-"), // ‒ FIGURE DASH
        ('\u{2013}', "-"), // – EN DASH
        ('\u{2014}', "--"), // — EM DASH
        ('\u{2015}', "--"), // ― HORIZONTAL BAR
        ('\u{2016}', "||"), // ‖ DOUBLE VERTICAL LINE
        ('\u{2017}', "_"), // ‗ DOUBLE LOW LINE
        ('\u{2018}', "'"), // ‘ LEFT SINGLE QUOTATION MARK
        ('\u{2019}', "'"), // ’ RIGHT SINGLE QUOTATION MARK
        ('\u{201A}', "'"), // ‚ SINGLE LOW-9 QUOTATION MARK
        ('\u{201B}', "'"), // ‛ SINGLE HIGH-REVERSED-9 QUOTATION MARK
        ('\u{201C}', "\""), // “ LEFT DOUBLE QUOTATION MARK
        ('\u{201D}', "\""), // ” RIGHT DOUBLE QUOTATION MARK
        ('\u{201E}', "\""), // „ DOUBLE LOW-9 QUOTATION MARK
        ('\u{201F}', "\""), // ‟ DOUBLE HIGH-REVERSED-9 QUOTATION MARK
        ('\u{2020}', "+"), // † DAGGER
        ('\u{2021}', "++"), // ‡ DOUBLE DAGGER
        ('\u{2022}', "*"), // • BULLET
        ('\u{2023}', ">"), // ‣ TRIANGULAR BULLET
        ('\u{2024}', "."), // ․ ONE DOT LEADER
        ('\u{2025}', ".."), // ‥ TWO DOT LEADER
        ('\u{2026}', "..."), // … HORIZONTAL ELLIPSIS
        ('\u{2027}', "-"), // ‧ HYPHENATION POINT
        ('\u{2028}', " "), // LINE SEPARATOR
        ('\u{2029}', " "), // PARAGRAPH SEPARATOR
        ('\u{202F}', " "), // NARROW NO-BREAK SPACE
        ('\u{2030}', " per mille "), // ‰ PER MILLE SIGN
        ('\u{2032}', "'"), // ′ PRIME
        ('\u{2033}', "''"), // ″ DOUBLE PRIME
        ('\u{2034}', "'''"), // ‴ TRIPLE PRIME
        ('\u{2039}', "<"), // ‹ SINGLE LEFT-POINTING ANGLE QUOTATION MARK
        ('\u{203A}', ">"), // › SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
        ('\u{203C}', "!!"), // ‼ DOUBLE EXCLAMATION MARK
        ('\u{2044}', "/"), // ⁄ FRACTION SLASH
        ('\u{2045}', "["), // ⁅ LEFT SQUARE BRACKET WITH QUILL
        ('\u{2046}', "]"), // ⁆ RIGHT SQUARE BRACKET WITH QUILL
        ('\u{2047}', "??"), // ⁇ DOUBLE QUESTION MARK
        ('\u{2048}', "?!"), // ⁈ QUESTION EXCLAMATION MARK
        ('\u{2049}', "!?"), // ⁉ EXCLAMATION QUESTION MARK
        ('\u{205F}', " "), // MEDIUM MATHEMATICAL SPACE
        ('\u{2060}', ""), // WORD JOINER
        ('\u{2070}', "0"), // ⁰ SUPERSCRIPT ZERO
        ('\u{2071}', "i"), // ⁱ SUPERSCRIPT LATIN SMALL LETTER I
        ('\u{2074}', "4"), // ⁴ SUPERSCRIPT FOUR
        ('\u{2075}', "5"), // ⁵ SUPERSCRIPT FIVE
        ('\u{2076}', "6"), // ⁶ SUPERSCRIPT SIX
        ('\u{2077}', "7"), // ⁷ SUPERSCRIPT SEVEN
        ('\u{2078}', "8"), // ⁸ SUPERSCRIPT EIGHT
        ('\u{2079}', "9"), // ⁹ SUPERSCRIPT NINE
        ('\u{207A}', "+"), // ⁺ SUPERSCRIPT PLUS SIGN
        ('\u{207C}', "="), // ⁼ SUPERSCRIPT EQUALS SIGN
        ('\u{207D}', "("), // ⁽ SUPERSCRIPT LEFT PARENTHESIS
        ('\u{207E}', ")"), // ⁾ SUPERSCRIPT RIGHT PARENTHESIS
        ('\u{207F}', "n"), // ⁿ SUPERSCRIPT LATIN SMALL LETTER N
        ('\u{2080}', "0"), // ₀ SUBSCRIPT ZERO
        ('\u{2081}', "1"), // ₁ SUBSCRIPT ONE
        ('\u{2082}', "2"), // ₂ SUBSCRIPT TWO
        ('\u{2083}', "3"), // ₃ SUBSCRIPT THREE
        ('\u{2084}', "4"), // ₄ SUBSCRIPT FOUR
        ('\u{2085}', "5"), // ₅ SUBSCRIPT FIVE
        ('\u{2086}', "6"), // ₆ SUBSCRIPT SIX
        ('\u{2087}', "7"), // ₇ SUBSCRIPT SEVEN
        ('\u{2088}', "8"), // ₈ SUBSCRIPT EIGHT
        ('\u{2089}', "9"), // ₉ SUBSCRIPT NINE
        ('\u{208A}', "+"), // ₊ SUBSCRIPT PLUS SIGN
        ('\u{208C}', "="), // ₌ SUBSCRIPT EQUALS SIGN
        ('\u{208D}', "("), // ₍ SUBSCRIPT LEFT PARENTHESIS
        ('\u{208E}', ")"), // ₎ SUBSCRIPT RIGHT PARENTHESIS
        ('\u{2090}', "a"), // ₐ LATIN SUBSCRIPT SMALL LETTER A
        ('\u{2091}', "e"), // ₑ LATIN SUBSCRIPT SMALL LETTER E
        ('\u{2092}', "o"), // ₒ LATIN SUBSCRIPT SMALL LETTER O
        ('\u{2093}', "x"), // ₓ LATIN SUBSCRIPT SMALL LETTER X
        ('\u{2095}', "h"), // ₕ LATIN SUBSCRIPT SMALL LETTER H
        ('\u{2096}', "k"), // ₖ LATIN SUBSCRIPT SMALL LETTER K
        ('\u{2097}', "l"), // ₗ LATIN SUBSCRIPT SMALL LETTER L
        ('\u{2098}', "m"), // ₘ LATIN SUBSCRIPT SMALL LETTER M
        ('\u{2099}', "n"), // ₙ LATIN SUBSCRIPT SMALL LETTER N
        ('\u{209A}', "p"), // ₚ LATIN SUBSCRIPT SMALL LETTER P
        ('\u{209B}', "s"), // ₛ LATIN SUBSCRIPT SMALL LETTER S
        ('\u{209C}', "t"), // ₜ LATIN SUBSCRIPT SMALL LETTER T
        ('\u{20A0}', "ECU"), // ₠ EURO-CURRENCY SIGN
        ('\u{20A1}', "CRC"), // ₡ COLON SIGN
        ('\u{20A3}', "FRF"), // ₣ FRENCH FRANC SIGN
        ('\u{20A4}', "L"), // ₤ LIRA SIGN
        ('\u{20A6}', "NGN"), // ₦ NAIRA SIGN
        ('\u{20A7}', "Pts"), // ₧ PESETA SIGN
        ('\u{20A8}', "Rs"), // ₨ RUPEE SIGN
        ('\u{20A9}', "KRW"), // ₩ WON SIGN
        ('\u{20AA}', "ILS"), // ₪ NEW SHEQEL SIGN
        ('\u{20AB}', "VND"), // ₫ DONG SIGN
        ('\u{20AC}', "EUR"), // € EURO SIGN
        ('\u{20AD}', "LAK"), // ₭ KIP SIGN
        ('\u{20AE}', "MNT"), // ₮ TUGRIK SIGN
        ('\u{20B1}', "PHP"), // ₱ PESO SIGN
        ('\u{20B9}', "INR"), // ₹ INDIAN RUPEE SIGN
        ('\u{20BA}', "TRY"), // ₺ TURKISH LIRA SIGN
        ('\u{20BD}', "RUB"), // ₽ RUBLE SIGN
        ('\u{20BF}', "BTC"), // ₿ BITCOIN SIGN
        ('\u{2102}', "C"), // ℂ DOUBLE-STRUCK CAPITAL C
        ('\u{2103}', " deg C"), // ℃ DEGREE CELSIUS
        ('\u{2105}', "c/o"), // ℅ CARE OF
        ('\u{2109}', " deg F"), // ℉ DEGREE FAHRENHEIT
        ('\u{210D}', "H"), // ℍ DOUBLE-STRUCK CAPITAL H
        ('\u{2113}', "l"), // ℓ SCRIPT SMALL L
        ('\u{2115}', "N"), // ℕ DOUBLE-STRUCK CAPITAL N
        ('\u{2116}', "No."), // № NUMERO SIGN
        ('\u{2117}', "(P)"), // ℗ SOUND RECORDING COPYRIGHT
        ('\u{2119}', "P"), // ℙ DOUBLE-STRUCK CAPITAL P
        ('\u{211A}', "Q"), // ℚ DOUBLE-STRUCK CAPITAL Q
        ('\u{211D}', "R"), // ℝ DOUBLE-STRUCK CAPITAL R
        ('\u{211E}', "Rx"), // ℞ PRESCRIPTION TAKE
        ('\u{2120}', "(SM)"), // ℠ SERVICE MARK
        ('\u{2122}', "(TM)"), // ™ TRADE MARK SIGN
        ('\u{2124}', "Z"), // ℤ DOUBLE-STRUCK CAPITAL Z
        ('\u{2126}', " (ohm) "), // Ω OHM SIGN
        ('\u{212A}', "K"), // K KELVIN SIGN
        ('\u{212B}', "A"), // Å ANGSTROM SIGN
        ('\u{212E}', "e"), // ℮ ESTIMATED SYMBOL
        ('\u{2150}', " 1/7 "), // ⅐ VULGAR FRACTION ONE SEVENTH
        ('\u{2151}', " 1/9 "), // ⅑ VULGAR FRACTION ONE NINTH
        ('\u{2152}', " 1/10 "), // ⅒ VULGAR FRACTION ONE TENTH
        ('\u{2153}', " 1/3 "), // ⅓ VULGAR FRACTION ONE THIRD
        ('\u{2154}', " 2/3 "), // ⅔ VULGAR FRACTION TWO THIRDS
        ('\u{2155}', " 1/5 "), // ⅕ VULGAR FRACTION ONE FIFTH
        ('\u{2156}', " 2/5 "), // ⅖ VULGAR FRACTION TWO FIFTHS
        ('\u{2157}', " 3/5 "), // ⅗ VULGAR FRACTION THREE FIFTHS
        ('\u{2158}', " 4/5 "), // ⅘ VULGAR FRACTION FOUR FIFTHS
        ('\u{2159}', " 1/6 "), // ⅙ VULGAR FRACTION ONE SIXTH
        ('\u{215A}', " 5/6 "), // ⅚ VULGAR FRACTION FIVE SIXTHS
        ('\u{215B}', " 1/8 "), // ⅛ VULGAR FRACTION ONE EIGHTH
        ('\u{215C}', " 3/8 "), // ⅜ VULGAR FRACTION THREE EIGHTHS
        ('\u{215D}', " 5/8 "), // ⅝ VULGAR FRACTION FIVE EIGHTHS
        ('\u{215E}', " 7/8 "), // ⅞ VULGAR FRACTION SEVEN EIGHTHS
        ('\u{215F}', " 1/ "), // ⅟ FRACTION NUMERATOR ONE
        ('\u{2160}', "I"), // Ⅰ ROMAN NUMERAL ONE
        ('\u{2161}', "II"), // Ⅱ ROMAN NUMERAL TWO
        ('\u{2162}', "III"), // Ⅲ ROMAN NUMERAL THREE
        ('\u{2163}', "IV"), // Ⅳ ROMAN NUMERAL FOUR
        ('\u{2164}', "V"), // Ⅴ ROMAN NUMERAL FIVE
        ('\u{2165}', "VI"), // Ⅵ ROMAN NUMERAL SIX
        ('\u{2166}', "VII"), // Ⅶ ROMAN NUMERAL SEVEN
        ('\u{2167}', "VIII"), // Ⅷ ROMAN NUMERAL EIGHT
        ('\u{2168}', "IX"), // Ⅸ ROMAN NUMERAL NINE
        ('\u{2169}', "X"), // Ⅹ ROMAN NUMERAL TEN
        ('\u{216A}', "XI"), // Ⅺ ROMAN NUMERAL ELEVEN
        ('\u{216B}', "XII"), // Ⅻ ROMAN NUMERAL TWELVE
        ('\u{216C}', "L"), // Ⅼ ROMAN NUMERAL FIFTY
        ('\u{216D}', "C"), // Ⅽ ROMAN NUMERAL ONE HUNDRED
        ('\u{216E}', "D"), // Ⅾ ROMAN NUMERAL FIVE HUNDRED
        ('\u{216F}', "M"), // Ⅿ ROMAN NUMERAL ONE THOUSAND
        ('\u{2170}', "i"), // ⅰ SMALL ROMAN NUMERAL ONE
        ('\u{2171}', "ii"), // ⅱ SMALL ROMAN NUMERAL TWO
        ('\u{2172}', "iii"), // ⅲ SMALL ROMAN NUMERAL THREE
        ('\u{2173}', "iv"), // ⅳ SMALL ROMAN NUMERAL FOUR
        ('\u{2174}', "v"), // ⅴ SMALL ROMAN NUMERAL FIVE
        ('\u{2175}', "vi"), // ⅵ SMALL ROMAN NUMERAL SIX
        ('\u{2176}', "vii"), // ⅶ SMALL ROMAN NUMERAL SEVEN
        ('\u{2177}', "viii"), // ⅷ SMALL ROMAN NUMERAL EIGHT
        ('\u{2178}', "ix"), // ⅸ SMALL ROMAN NUMERAL NINE
        ('\u{2179}', "x"), // ⅹ SMALL ROMAN NUMERAL TEN
        ('\u{217A}', "xi"), // ⅺ SMALL ROMAN NUMERAL ELEVEN
        ('\u{217B}', "xii"), // ⅻ SMALL ROMAN NUMERAL TWELVE
        ('\u{217C}', "l"), // ⅼ SMALL ROMAN NUMERAL FIFTY
        ('\u{217D}', "c"), // ⅽ SMALL ROMAN NUMERAL ONE HUNDRED
        ('\u{217E}', "d"), // ⅾ SMALL ROMAN NUMERAL FIVE HUNDRED
        ('\u{217F}', "m"), // ⅿ SMALL ROMAN NUMERAL ONE THOUSAND
        ('\u{2189}', " 0/3 "), // ↉ VULGAR FRACTION ZERO THIRDS
        ('\u{2190}', "<-"), // ← LEFTWARDS ARROW
        ('\u{2191}', "^"), // ↑ UPWARDS ARROW
        ('\u{2192}', "->"), // → RIGHTWARDS ARROW
        ('\u{2193}', "v"), // ↓ DOWNWARDS ARROW
        ('\u{2194}', "<->"), // ↔ LEFT RIGHT ARROW
        ('\u{21D0}', "<="), // ⇐ LEFTWARDS DOUBLE ARROW
        ('\u{21D2}', "=>"), // ⇒ RIGHTWARDS DOUBLE ARROW
        ('\u{21D4}', "<=>"), // ⇔ LEFT RIGHT DOUBLE ARROW
        ('\u{2200}', " for all "), // ∀ FOR ALL
        ('\u{2202}', "d"), // ∂ PARTIAL DIFFERENTIAL
        ('\u{2203}', " exists "), // ∃ THERE EXISTS
        ('\u{2205}', " empty set "), // ∅ EMPTY SET
        ('\u{2206}', " Delta "), // ∆ INCREMENT
        ('\u{2207}', " nabla "), // ∇ NABLA
        ('\u{2208}', " in "), // ∈ ELEMENT OF
        ('\u{2209}', " not in "), // ∉ NOT AN ELEMENT OF
        ('\u{220F}', " prod "), // ∏ N-ARY PRODUCT
        ('\u{2211}', " sum "), // ∑ N-ARY SUMMATION
        ('\u{2212}', "-"), // − MINUS SIGN
        ('\u{2213}', "-/+"), // ∓ MINUS-OR-PLUS SIGN
        ('\u{2215}', "/"), // ∕ DIVISION SLASH
        ('\u{2217}', "*"), // ∗ ASTERISK OPERATOR
        ('\u{2218}', "o"), // ∘ RING OPERATOR
        ('\u{2219}', "."), // ∙ BULLET OPERATOR
        ('\u{221A}', " sqrt "), // √ SQUARE ROOT
        ('\u{221D}', " ~ "), // ∝ PROPORTIONAL TO
        ('\u{221E}', " infinity "), // ∞ INFINITY
        ('\u{2220}', " angle "), // ∠ ANGLE
        ('\u{2227}', " and "), // ∧ LOGICAL AND
        ('\u{2228}', " or "), // ∨ LOGICAL OR
        ('\u{2229}', " intersection "), // ∩ INTERSECTION
        ('\u{222A}', " union "), // ∪ UNION
        ('\u{222B}', " integral "), // ∫ INTEGRAL
        ('\u{2234}', " therefore "), // ∴ THEREFORE
        ('\u{223C}', "~"), // ∼ TILDE OPERATOR
        ('\u{2245}', "~="), // ≅ APPROXIMATELY EQUAL TO
        ('\u{2248}', "~"), // ≈ ALMOST EQUAL TO
        ('\u{2260}', "!="), // ≠ NOT EQUAL TO
        ('\u{2261}', "==="), // ≡ IDENTICAL TO
        ('\u{2264}', "<="), // ≤ LESS-THAN OR EQUAL TO
        ('\u{2265}', ">="), // ≥ GREATER-THAN OR EQUAL TO
        ('\u{226A}', "<<"), // ≪ MUCH LESS-THAN
        ('\u{226B}', ">>"), // ≫ MUCH GREATER-THAN
        ('\u{2282}', " subset "), // ⊂ SUBSET OF
        ('\u{2283}', " superset "), // ⊃ SUPERSET OF
        ('\u{2286}', " subseteq "), // ⊆ SUBSET OF OR EQUAL TO
        ('\u{2287}', " superseteq "), // ⊇ SUPERSET OF OR EQUAL TO
        ('\u{2295}', "(+)"), // ⊕ CIRCLED PLUS
        ('\u{2297}', "(x)"), // ⊗ CIRCLED TIMES
        ('\u{22A5}', " perp "), // ⊥ UP TACK
        ('\u{22C5}', "."), // ⋅ DOT OPERATOR
        ('\u{3000}', " "), // IDEOGRAPHIC SPACE
        ('\u{3001}', ","), // 、 IDEOGRAPHIC COMMA
        ('\u{3002}', "."), // 。 IDEOGRAPHIC FULL STOP
        ('\u{300C}', "\""), // 「 LEFT CORNER BRACKET
        ('\u{300D}', "\""), // 」 RIGHT CORNER BRACKET
        ('\u{FEFF}', ""), // ZERO WIDTH NO-BREAK SPACE
    ],
);
