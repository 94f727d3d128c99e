//! Primary ASCII-equivalence table: Latin letters with diacritics, ligatures,
//! and single-letter fallbacks for Greek and Cyrillic.

use crate::CodePointMap;

pub static ASCII: CodePointMap = CodePointMap::new(
    "ascii",
    &[
        ('\u{00AA}', "a"), // ª FEMININE ORDINAL INDICATOR
        ('\u{00B5}', "u"), // µ MICRO SIGN
        ('\u{00BA}', "o"), // º MASCULINE ORDINAL INDICATOR
        ('\u{00C0}', "A"), // À LATIN CAPITAL LETTER A WITH GRAVE
        ('\u{00C1}', "A"), // Á LATIN CAPITAL LETTER A WITH ACUTE
        ('\u{00C2}', "A"), // Â LATIN CAPITAL LETTER A WITH CIRCUMFLEX
        ('\u{00C3}', "A"), // Ã LATIN CAPITAL LETTER A WITH TILDE
        ('\u{00C4}', "A"), // Ä LATIN CAPITAL LETTER A WITH DIAERESIS
        ('\u{00C5}', "A"), // Å LATIN CAPITAL LETTER A WITH RING ABOVE
        ('\u{00C6}', "AE"), // Æ LATIN CAPITAL LETTER AE
        ('\u{00C7}', "C"), // Ç LATIN CAPITAL LETTER C WITH CEDILLA
        ('\u{00C8}', "E"), // È LATIN CAPITAL LETTER E WITH GRAVE
        ('\u{00C9}', "E"), // É LATIN CAPITAL LETTER E WITH ACUTE
        ('\u{00CA}', "E"), // Ê LATIN CAPITAL LETTER E WITH CIRCUMFLEX
        ('\u{00CB}', "E"), // Ë LATIN CAPITAL LETTER E WITH DIAERESIS
        ('\u{00CC}', "I"), // Ì LATIN CAPITAL LETTER I WITH GRAVE
        ('\u{00CD}', "I"), // Í LATIN CAPITAL LETTER I WITH ACUTE
        ('\u{00CE}', "I"), // Î LATIN CAPITAL LETTER I WITH CIRCUMFLEX
        ('\u{00CF}', "I"), // Ï LATIN CAPITAL LETTER I WITH DIAERESIS
        ('\u{00D0}', "D"), // Ð LATIN CAPITAL LETTER ETH
        ('\u{00D1}', "N"), // Ñ LATIN CAPITAL LETTER N WITH TILDE
        ('\u{00D2}', "O"), // Ò LATIN CAPITAL LETTER O WITH GRAVE
        ('\u{00D3}', "O"), // Ó LATIN CAPITAL LETTER O WITH ACUTE
        ('\u{00D4}', "O"), // Ô LATIN CAPITAL LETTER O WITH CIRCUMFLEX
        ('\u{00D5}', "O"), // Õ LATIN CAPITAL LETTER O WITH TILDE
        ('\u{00D6}', "O"), // Ö LATIN CAPITAL LETTER O WITH DIAERESIS
        ('\u{00D8}', "O"), // Ø LATIN CAPITAL LETTER O WITH STROKE
        ('\u{00D9}', "U"), // Ù LATIN CAPITAL LETTER U WITH GRAVE
        ('\u{00DA}', "U"), // Ú LATIN CAPITAL LETTER U WITH ACUTE
        ('\u{00DB}', "U"), // Û LATIN CAPITAL LETTER U WITH CIRCUMFLEX
        ('\u{00DC}', "U"), // Ü LATIN CAPITAL LETTER U WITH DIAERESIS
        ('\u{00DD}', "Y"), // Ý LATIN CAPITAL LETTER Y WITH ACUTE
        ('\u{00DE}', "Th"), // Þ LATIN CAPITAL LETTER THORN
        ('\u{00DF}', "ss"), // ß LATIN SMALL LETTER SHARP S
        ('\u{00E0}', "a"), // à LATIN SMALL LETTER A WITH GRAVE
        ('\u{00E1}', "a"), // á LATIN SMALL LETTER A WITH ACUTE
        ('\u{00E2}', "a"), // â LATIN SMALL LETTER A WITH CIRCUMFLEX
        ('\u{00E3}', "a"), // ã LATIN SMALL LETTER A WITH TILDE
        ('\u{00E4}', "a"), // ä LATIN SMALL LETTER A WITH DIAERESIS
        ('\u{00E5}', "a"), // å LATIN SMALL LETTER A WITH RING ABOVE
        ('\u{00E6}', "ae"), // æ LATIN SMALL LETTER AE
        ('\u{00E7}', "c"), // ç LATIN SMALL LETTER C WITH CEDILLA
        ('\u{00E8}', "e"), // è LATIN SMALL LETTER E WITH GRAVE
        ('\u{00E9}', "e"), // é LATIN SMALL LETTER E WITH ACUTE
        ('\u{00EA}', "e"), // ê LATIN SMALL LETTER E WITH CIRCUMFLEX
        ('\u{00EB}', "e"), // ë LATIN SMALL LETTER E WITH DIAERESIS
        ('\u{00EC}', "i"), // ì LATIN SMALL LETTER I WITH GRAVE
        ('\u{00ED}', "i"), // í LATIN SMALL LETTER I WITH ACUTE
        ('\u{00EE}', "i"), // î LATIN SMALL LETTER I WITH CIRCUMFLEX
        ('\u{00EF}', "i"), // ï LATIN SMALL LETTER I WITH DIAERESIS
        ('\u{00F0}', "d"), // ð LATIN SMALL LETTER ETH
        ('\u{00F1}', "n"), // ñ LATIN SMALL LETTER N WITH TILDE
        ('\u{00F2}', "o"), // ò LATIN SMALL LETTER O WITH GRAVE
        ('\u{00F3}', "o"), // ó LATIN SMALL LETTER O WITH ACUTE
        ('\u{00F4}', "o"), // ô LATIN SMALL LETTER O WITH CIRCUMFLEX
        ('\u{00F5}', "o"), // õ LATIN SMALL LETTER O WITH TILDE
        ('\u{00F6}', "o"), // ö LATIN SMALL LETTER O WITH DIAERESIS
        ('\u{00F8}', "o"), // ø LATIN SMALL LETTER O WITH STROKE
        ('\u{00F9}', "u"), // ù LATIN SMALL LETTER U WITH GRAVE
        ('\u{00FA}', "u"), // ú LATIN SMALL LETTER U WITH ACUTE
        ('\u{00FB}', "u"), // û LATIN SMALL LETTER U WITH CIRCUMFLEX
        ('\u{00FC}', "u"), // ü LATIN SMALL LETTER U WITH DIAERESIS
        ('\u{00FD}', "y"), // ý LATIN SMALL LETTER Y WITH ACUTE
        ('\u{00FE}', "th"), // þ LATIN SMALL LETTER THORN
        ('\u{00FF}', "y"), // ÿ LATIN SMALL LETTER Y WITH DIAERESIS
        ('\u{0100}', "A"), // Ā LATIN CAPITAL LETTER A WITH MACRON
        ('\u{0101}', "a"), // ā LATIN SMALL LETTER A WITH MACRON
        ('\u{0102}', "A"), // Ă LATIN CAPITAL LETTER A WITH BREVE
        ('\u{0103}', "a"), // ă LATIN SMALL LETTER A WITH BREVE
        ('\u{0104}', "A"), // Ą LATIN CAPITAL LETTER A WITH OGONEK
        ('\u{0105}', "a"), // ą LATIN SMALL LETTER A WITH OGONEK
        ('\u{0106}', "C"), // Ć LATIN CAPITAL LETTER C WITH ACUTE
        ('\u{0107}', "c"), // ć LATIN SMALL LETTER C WITH ACUTE
        ('\u{0108}', "C"), // Ĉ LATIN CAPITAL LETTER C WITH CIRCUMFLEX
        ('\u{0109}', "c"), // ĉ LATIN SMALL LETTER C WITH CIRCUMFLEX
        ('\u{010A}', "C"), // Ċ LATIN CAPITAL LETTER C WITH DOT ABOVE
        ('\u{010B}', "c"), // ċ LATIN SMALL LETTER C WITH DOT ABOVE
        ('\u{010C}', "C"), // Č LATIN CAPITAL LETTER C WITH CARON
        ('\u{010D}', "c"), // č LATIN SMALL LETTER C WITH CARON
        ('\u{010E}', "D"), // Ď LATIN CAPITAL LETTER D WITH CARON
        ('\u{010F}', "d"), // ď LATIN SMALL LETTER D WITH CARON
        ('\u{0110}', "D"), // Đ LATIN CAPITAL LETTER D WITH STROKE
        ('\u{0111}', "d"), // đ LATIN SMALL LETTER D WITH STROKE
        ('\u{0112}', "E"), // Ē LATIN CAPITAL LETTER E WITH MACRON
        ('\u{0113}', "e"), // ē LATIN SMALL LETTER E WITH MACRON
        ('\u{0114}', "E"), // Ĕ LATIN CAPITAL LETTER E WITH BREVE
        ('\u{0115}', "e"), // ĕ LATIN SMALL LETTER E WITH BREVE
        ('\u{0116}', "E"), // Ė LATIN CAPITAL LETTER E WITH DOT ABOVE
        ('\u{0117}', "e"), // ė LATIN SMALL LETTER E WITH DOT ABOVE
        ('\u{0118}', "E"), // Ę LATIN CAPITAL LETTER E WITH OGONEK
        ('\u{0119}', "e"), // ę LATIN SMALL LETTER E WITH OGONEK
        ('\u{011A}', "E"), // Ě LATIN CAPITAL LETTER E WITH CARON
        ('\u{011B}', "e"), // ě LATIN SMALL LETTER E WITH CARON
        ('\u{011C}', "G"), // Ĝ LATIN CAPITAL LETTER G WITH CIRCUMFLEX
        ('\u{011D}', "g"), // ĝ LATIN SMALL LETTER G WITH CIRCUMFLEX
        ('\u{011E}', "G"), // Ğ LATIN CAPITAL LETTER G WITH BREVE
        ('\u{011F}', "g"), // ğ LATIN SMALL LETTER G WITH BREVE
        ('\u{0120}', "G"), // Ġ LATIN CAPITAL LETTER G WITH DOT ABOVE
        ('\u{0121}', "g"), // ġ LATIN SMALL LETTER G WITH DOT ABOVE
        ('\u{0122}', "G"), // Ģ LATIN CAPITAL LETTER G WITH CEDILLA
        ('\u{0123}', "g"), // ģ LATIN SMALL LETTER G WITH CEDILLA
        ('\u{0124}', "H"), // Ĥ LATIN CAPITAL LETTER H WITH CIRCUMFLEX
        ('\u{0125}', "h"), // ĥ LATIN SMALL LETTER H WITH CIRCUMFLEX
        ('\u{0126}', "H"), // Ħ LATIN CAPITAL LETTER H WITH STROKE
        ('\u{0127}', "h"), // ħ LATIN SMALL LETTER H WITH STROKE
        ('\u{0128}', "I"), // Ĩ LATIN CAPITAL LETTER I WITH TILDE
        ('\u{0129}', "i"), // ĩ LATIN SMALL LETTER I WITH TILDE
        ('\u{012A}', "I"), // Ī LATIN CAPITAL LETTER I WITH MACRON
        ('\u{012B}', "i"), // ī LATIN SMALL LETTER I WITH MACRON
        ('\u{012C}', "I"), // Ĭ LATIN CAPITAL LETTER I WITH BREVE
        ('\u{012D}', "i"), // ĭ LATIN SMALL LETTER I WITH BREVE
        ('\u{012E}', "I"), // Į LATIN CAPITAL LETTER I WITH OGONEK
        ('\u{012F}', "i"), // į LATIN SMALL LETTER I WITH OGONEK
        ('\u{0130}', "I"), // İ LATIN CAPITAL LETTER I WITH DOT ABOVE
        ('\u{0131}', "i"), // ı LATIN SMALL LETTER DOTLESS I
        ('\u{0132}', "IJ"), // Ĳ LATIN CAPITAL LIGATURE IJ
        ('\u{0133}', "ij"), // ĳ LATIN SMALL LIGATURE IJ
        ('\u{0134}', "J"), // Ĵ LATIN CAPITAL LETTER J WITH CIRCUMFLEX
        ('\u{0135}', "j"), // ĵ LATIN SMALL LETTER J WITH CIRCUMFLEX
        ('\u{0136}', "K"), // Ķ LATIN CAPITAL LETTER K WITH CEDILLA
        ('\u{0137}', "k"), // ķ LATIN SMALL LETTER K WITH CEDILLA
        ('\u{0138}', "q"), // ĸ LATIN SMALL LETTER KRA
        ('\u{0139}', "L"), // Ĺ LATIN CAPITAL LETTER L WITH ACUTE
        ('\u{013A}', "l"), // ĺ LATIN SMALL LETTER L WITH ACUTE
        ('\u{013B}', "L"), // Ļ LATIN CAPITAL LETTER L WITH CEDILLA
        ('\u{013C}', "l"), // ļ LATIN SMALL LETTER L WITH CEDILLA
        ('\u{013D}', "L"), // Ľ LATIN CAPITAL LETTER L WITH CARON
        ('\u{013E}', "l"), // ľ LATIN SMALL LETTER L WITH CARON
        ('\u{013F}', "L"), // Ŀ LATIN CAPITAL LETTER L WITH MIDDLE DOT
        ('\u{0140}', "l"), // ŀ LATIN SMALL LETTER L WITH MIDDLE DOT
        ('\u{0141}', "L"), // Ł LATIN CAPITAL LETTER L WITH STROKE
        ('\u{0142}', "l"), // ł LATIN SMALL LETTER L WITH STROKE
        ('\u{0143}', "N"), // Ń LATIN CAPITAL LETTER N WITH ACUTE
        ('\u{0144}', "n"), // ń LATIN SMALL LETTER N WITH ACUTE
        ('\u{0145}', "N"), // Ņ LATIN CAPITAL LETTER N WITH CEDILLA
        ('\u{0146}', "n"), // ņ LATIN SMALL LETTER N WITH CEDILLA
        ('\u{0147}', "N"), // Ň LATIN CAPITAL LETTER N WITH CARON
        ('\u{0148}', "n"), // ň LATIN SMALL LETTER N WITH CARON
        ('\u{0149}', "'n"), // ŉ LATIN SMALL LETTER N PRECEDED BY APOSTROPHE
        ('\u{014A}', "NG"), // Ŋ LATIN CAPITAL LETTER ENG
        ('\u{014B}', "ng"), // ŋ LATIN SMALL LETTER ENG
        ('\u{014C}', "O"), // Ō LATIN CAPITAL LETTER O WITH MACRON
        ('\u{014D}', "o"), // ō LATIN SMALL LETTER O WITH MACRON
        ('\u{014E}', "O"), // Ŏ LATIN CAPITAL LETTER O WITH BREVE
        ('\u{014F}', "o"), // ŏ LATIN SMALL LETTER O WITH BREVE
        ('\u{0150}', "O"), // Ő LATIN CAPITAL LETTER O WITH DOUBLE ACUTE
        ('\u{0151}', "o"), // ő LATIN SMALL LETTER O WITH DOUBLE ACUTE
        ('\u{0152}', "OE"), // Œ LATIN CAPITAL LIGATURE OE
        ('\u{0153}', "oe"), // œ LATIN SMALL LIGATURE OE
        ('\u{0154}', "R"), // Ŕ LATIN CAPITAL LETTER R WITH ACUTE
        ('\u{0155}', "r"), // ŕ LATIN SMALL LETTER R WITH ACUTE
        ('\u{0156}', "R"), // Ŗ LATIN CAPITAL LETTER R WITH CEDILLA
        ('\u{0157}', "r"), // ŗ LATIN SMALL LETTER R WITH CEDILLA
        ('\u{0158}', "R"), // Ř LATIN CAPITAL LETTER R WITH CARON
        ('\u{0159}', "r"), // ř LATIN SMALL LETTER R WITH CARON
        ('\u{015A}', "S"), // Ś LATIN CAPITAL LETTER S WITH ACUTE
        ('\u{015B}', "s"), // ś LATIN SMALL LETTER S WITH ACUTE
        ('\u{015C}', "S"), // Ŝ LATIN CAPITAL LETTER S WITH CIRCUMFLEX
        ('\u{015D}', "s"), // ŝ LATIN SMALL LETTER S WITH CIRCUMFLEX
        ('\u{015E}', "S"), // Ş LATIN CAPITAL LETTER S WITH CEDILLA
        ('\u{015F}', "s"), // ş LATIN SMALL LETTER S WITH CEDILLA
        ('\u{0160}', "S"), // Š LATIN CAPITAL LETTER S WITH CARON
        ('\u{0161}', "s"), // š LATIN SMALL LETTER S WITH CARON
        ('\u{0162}', "T"), // Ţ LATIN CAPITAL LETTER T WITH CEDILLA
        ('\u{0163}', "t"), // ţ LATIN SMALL LETTER T WITH CEDILLA
        ('\u{0164}', "T"), // Ť LATIN CAPITAL LETTER T WITH CARON
        ('\u{0165}', "t"), // ť LATIN SMALL LETTER T WITH CARON
        ('\u{0166}', "T"), // Ŧ LATIN CAPITAL LETTER T WITH STROKE
        ('\u{0167}', "t"), // ŧ LATIN SMALL LETTER T WITH STROKE
        ('\u{0168}', "U"), // Ũ LATIN CAPITAL LETTER U WITH TILDE
        ('\u{0169}', "u"), // ũ LATIN SMALL LETTER U WITH TILDE
        ('\u{016A}', "U"), // Ū LATIN CAPITAL LETTER U WITH MACRON
        ('\u{016B}', "u"), // ū LATIN SMALL LETTER U WITH MACRON
        ('\u{016C}', "U"), // Ŭ LATIN CAPITAL LETTER U WITH BREVE
        ('\u{016D}', "u"), // ŭ LATIN SMALL LETTER U WITH BREVE
        ('\u{016E}', "U"), // Ů LATIN CAPITAL LETTER U WITH RING ABOVE
        ('\u{016F}', "u"), // ů LATIN SMALL LETTER U WITH RING ABOVE
        ('\u{0170}', "U"), // Ű LATIN CAPITAL LETTER U WITH DOUBLE ACUTE
        ('\u{0171}', "u"), // ű LATIN SMALL LETTER U WITH DOUBLE ACUTE
        ('\u{0172}', "U"), // Ų LATIN CAPITAL LETTER U WITH OGONEK
        ('\u{0173}', "u"), // ų LATIN SMALL LETTER U WITH OGONEK
        ('\u{0174}', "W"), // Ŵ LATIN CAPITAL LETTER W WITH CIRCUMFLEX
        ('\u{0175}', "w"), // ŵ LATIN SMALL LETTER W WITH CIRCUMFLEX
        ('\u{0176}', "Y"), // Ŷ LATIN CAPITAL LETTER Y WITH CIRCUMFLEX
        ('\u{0177}', "y"), // ŷ LATIN SMALL LETTER Y WITH CIRCUMFLEX
        ('\u{0178}', "Y"), // Ÿ LATIN CAPITAL LETTER Y WITH DIAERESIS
        ('\u{0179}', "Z"), // Ź LATIN CAPITAL LETTER Z WITH ACUTE
        ('\u{017A}', "z"), // ź LATIN SMALL LETTER Z WITH ACUTE
        ('\u{017B}', "Z"), // Ż LATIN CAPITAL LETTER Z WITH DOT ABOVE
        ('\u{017C}', "z"), // ż LATIN SMALL LETTER Z WITH DOT ABOVE
        ('\u{017D}', "Z"), // Ž LATIN CAPITAL LETTER Z WITH CARON
        ('\u{017E}', "z"), // ž LATIN SMALL LETTER Z WITH CARON
        ('\u{017F}', "s"), // ſ LATIN SMALL LETTER LONG S
        ('\u{0180}', "b"), // ƀ LATIN SMALL LETTER B WITH STROKE
        ('\u{0181}', "B"), // Ɓ LATIN CAPITAL LETTER B WITH HOOK
        ('\u{0182}', "B"), // Ƃ LATIN CAPITAL LETTER B WITH TOPBAR
        ('\u{0183}', "b"), // ƃ LATIN SMALL LETTER B WITH TOPBAR
        ('\u{0186}', "O"), // Ɔ LATIN CAPITAL LETTER OPEN O
        ('\u{0187}', "C"), // Ƈ LATIN CAPITAL LETTER C WITH HOOK
        ('\u{0188}', "c"), // ƈ LATIN SMALL LETTER C WITH HOOK
        ('\u{0189}', "D"), // Ɖ LATIN CAPITAL LETTER AFRICAN D
        ('\u{018A}', "D"), // Ɗ LATIN CAPITAL LETTER D WITH HOOK
        ('\u{018B}', "D"), // Ƌ LATIN CAPITAL LETTER D WITH TOPBAR
        ('\u{018C}', "d"), // ƌ LATIN SMALL LETTER D WITH TOPBAR
        ('\u{018E}', "E"), // Ǝ LATIN CAPITAL LETTER REVERSED E
        ('\u{0190}', "E"), // Ɛ LATIN CAPITAL LETTER OPEN E
        ('\u{0191}', "F"), // Ƒ LATIN CAPITAL LETTER F WITH HOOK
        ('\u{0192}', "f"), // ƒ LATIN SMALL LETTER F WITH HOOK
        ('\u{0193}', "G"), // Ɠ LATIN CAPITAL LETTER G WITH HOOK
        ('\u{0195}', "hv"), // ƕ LATIN SMALL LETTER HV
        ('\u{0197}', "I"), // Ɨ LATIN CAPITAL LETTER I WITH STROKE
        ('\u{0198}', "K"), // Ƙ LATIN CAPITAL LETTER K WITH HOOK
        ('\u{0199}', "k"), // ƙ LATIN SMALL LETTER K WITH HOOK
        ('\u{019A}', "l"), // ƚ LATIN SMALL LETTER L WITH BAR
        ('\u{019C}', "M"), // Ɯ LATIN CAPITAL LETTER TURNED M
        ('\u{019D}', "N"), // Ɲ LATIN CAPITAL LETTER N WITH LEFT HOOK
        ('\u{019E}', "n"), // ƞ LATIN SMALL LETTER N WITH LONG RIGHT LEG
        ('\u{019F}', "O"), // Ɵ LATIN CAPITAL LETTER O WITH MIDDLE TILDE
        ('\u{01A0}', "O"), // Ơ LATIN CAPITAL LETTER O WITH HORN
        ('\u{01A1}', "o"), // ơ LATIN SMALL LETTER O WITH HORN
        ('\u{01A2}', "Oi"), // Ƣ LATIN CAPITAL LETTER OI
        ('\u{01A3}', "oi"), // ƣ LATIN SMALL LETTER OI
        ('\u{01A4}', "P"), // Ƥ LATIN CAPITAL LETTER P WITH HOOK
        ('\u{01A5}', "p"), // ƥ LATIN SMALL LETTER P WITH HOOK
        ('\u{01AB}', "t"), // ƫ LATIN SMALL LETTER T WITH PALATAL HOOK
        ('\u{01AC}', "T"), // Ƭ LATIN CAPITAL LETTER T WITH HOOK
        ('\u{01AD}', "t"), // ƭ LATIN SMALL LETTER T WITH HOOK
        ('\u{01AE}', "T"), // Ʈ LATIN CAPITAL LETTER T WITH RETROFLEX HOOK
        ('\u{01AF}', "U"), // Ư LATIN CAPITAL LETTER U WITH HORN
        ('\u{01B0}', "u"), // ư LATIN SMALL LETTER U WITH HORN
        ('\u{01B2}', "V"), // Ʋ LATIN CAPITAL LETTER V WITH HOOK
        ('\u{01B3}', "Y"), // Ƴ LATIN CAPITAL LETTER Y WITH HOOK
        ('\u{01B4}', "y"), // ƴ LATIN SMALL LETTER Y WITH HOOK
        ('\u{01B5}', "Z"), // Ƶ LATIN CAPITAL LETTER Z WITH STROKE
        ('\u{01B6}', "z"), // ƶ LATIN SMALL LETTER Z WITH STROKE
        ('\u{01C4}', "DZ"), // Ǆ LATIN CAPITAL LETTER DZ WITH CARON
        ('\u{01C5}', "Dz"), // ǅ LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON
        ('\u{01C6}', "dz"), // ǆ LATIN SMALL LETTER DZ WITH CARON
        ('\u{01C7}', "LJ"), // Ǉ LATIN CAPITAL LETTER LJ
        ('\u{01C8}', "Lj"), // ǈ LATIN CAPITAL LETTER L WITH SMALL LETTER J
        ('\u{01C9}', "lj"), // ǉ LATIN SMALL LETTER LJ
        ('\u{01CA}', "NJ"), // Ǌ LATIN CAPITAL LETTER NJ
        ('\u{01CB}', "Nj"), // ǋ LATIN CAPITAL LETTER N WITH SMALL LETTER J
        ('\u{01CC}', "nj"), // ǌ LATIN SMALL LETTER NJ
        ('\u{01CD}', "A"), // Ǎ LATIN CAPITAL LETTER A WITH CARON
        ('\u{01CE}', "a"), // ǎ LATIN SMALL LETTER A WITH CARON
        ('\u{01CF}', "I"), // Ǐ LATIN CAPITAL LETTER I WITH CARON
        ('\u{01D0}', "i"), // ǐ LATIN SMALL LETTER I WITH CARON
        ('\u{01D1}', "O"), // Ǒ LATIN CAPITAL LETTER O WITH CARON
        ('\u{01D2}', "o"), // ǒ LATIN SMALL LETTER O WITH CARON
        ('\u{01D3}', "U"), // Ǔ LATIN CAPITAL LETTER U WITH CARON
        ('\u{01D4}', "u"), // ǔ LATIN SMALL LETTER U WITH CARON
        ('\u{01D5}', "U"), // Ǖ LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON
        ('\u{01D6}', "u"), // ǖ LATIN SMALL LETTER U WITH DIAERESIS AND MACRON
        ('\u{01D7}', "U"), // Ǘ LATIN CAPITAL LETTER U WITH DIAERESIS AND ACUTE
        ('\u{01D8}', "u"), // ǘ LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE
        ('\u{01D9}', "U"), // Ǚ LATIN CAPITAL LETTER U WITH DIAERESIS AND CARON
        ('\u{01DA}', "u"), // ǚ LATIN SMALL LETTER U WITH DIAERESIS AND CARON
        ('\u{01DB}', "U"), // Ǜ LATIN CAPITAL LETTER U WITH DIAERESIS AND GRAVE
        ('\u{01DC}', "u"), // ǜ LATIN SMALL LETTER U WITH DIAERESIS AND GRAVE
        ('\u{01DD}', "e"), // ǝ LATIN SMALL LETTER TURNED E
        ('\u{01DE}', "A"), // Ǟ LATIN CAPITAL LETTER A WITH DIAERESIS AND MACRON
        ('\u{01DF}', "a"), // ǟ LATIN SMALL LETTER A WITH DIAERESIS AND MACRON
        ('\u{01E0}', "A"), // Ǡ LATIN CAPITAL LETTER A WITH DOT ABOVE AND MACRON
        ('\u{01E1}', "a"), // ǡ LATIN SMALL LETTER A WITH DOT ABOVE AND MACRON
        ('\u{01E2}', "Ae"), // Ǣ LATIN CAPITAL LETTER AE WITH MACRON
        ('\u{01E3}', "ae"), // ǣ LATIN SMALL LETTER AE WITH MACRON
        ('\u{01E4}', "G"), // Ǥ LATIN CAPITAL LETTER G WITH STROKE
        ('\u{01E5}', "g"), // ǥ LATIN SMALL LETTER G WITH STROKE
        ('\u{01E6}', "G"), // Ǧ LATIN CAPITAL LETTER G WITH CARON
        ('\u{01E7}', "g"), // ǧ LATIN SMALL LETTER G WITH CARON
        ('\u{01E8}', "K"), // Ǩ LATIN CAPITAL LETTER K WITH CARON
        ('\u{01E9}', "k"), // ǩ LATIN SMALL LETTER K WITH CARON
        ('\u{01EA}', "O"), // Ǫ LATIN CAPITAL LETTER O WITH OGONEK
        ('\u{01EB}', "o"), // ǫ LATIN SMALL LETTER O WITH OGONEK
        ('\u{01EC}', "O"), // Ǭ LATIN CAPITAL LETTER O WITH OGONEK AND MACRON
        ('\u{01ED}', "o"), // ǭ LATIN SMALL LETTER O WITH OGONEK AND MACRON
        ('\u{01F0}', "j"), // ǰ LATIN SMALL LETTER J WITH CARON
        ('\u{01F1}', "DZ"), // Ǳ LATIN CAPITAL LETTER DZ
        ('\u{01F2}', "Dz"), // ǲ LATIN CAPITAL LETTER D WITH SMALL LETTER Z
        ('\u{01F3}', "dz"), // ǳ LATIN SMALL LETTER DZ
        ('\u{01F4}', "G"), // Ǵ LATIN CAPITAL LETTER G WITH ACUTE
        ('\u{01F5}', "g"), // ǵ LATIN SMALL LETTER G WITH ACUTE
        ('\u{01F8}', "N"), // Ǹ LATIN CAPITAL LETTER N WITH GRAVE
        ('\u{01F9}', "n"), // ǹ LATIN SMALL LETTER N WITH GRAVE
        ('\u{01FA}', "A"), // Ǻ LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE
        ('\u{01FB}', "a"), // ǻ LATIN SMALL LETTER A WITH RING ABOVE AND ACUTE
        ('\u{01FC}', "Ae"), // Ǽ LATIN CAPITAL LETTER AE WITH ACUTE
        ('\u{01FD}', "ae"), // ǽ LATIN SMALL LETTER AE WITH ACUTE
        ('\u{01FE}', "O"), // Ǿ LATIN CAPITAL LETTER O WITH STROKE AND ACUTE
        ('\u{01FF}', "o"), // ǿ LATIN SMALL LETTER O WITH STROKE AND ACUTE
        ('\u{0200}', "A"), // Ȁ LATIN CAPITAL LETTER A WITH DOUBLE GRAVE
        ('\u{0201}', "a"), // ȁ LATIN SMALL LETTER A WITH DOUBLE GRAVE
        ('\u{0202}', "A"), // Ȃ LATIN CAPITAL LETTER A WITH INVERTED BREVE
        ('\u{0203}', "a"), // ȃ LATIN SMALL LETTER A WITH INVERTED BREVE
        ('\u{0204}', "E"), // Ȅ LATIN CAPITAL LETTER E WITH DOUBLE GRAVE
        ('\u{0205}', "e"), // ȅ LATIN SMALL LETTER E WITH DOUBLE GRAVE
        ('\u{0206}', "E"), // Ȇ LATIN CAPITAL LETTER E WITH INVERTED BREVE
        ('\u{0207}', "e"), // ȇ LATIN SMALL LETTER E WITH INVERTED BREVE
        ('\u{0208}', "I"), // Ȉ LATIN CAPITAL LETTER I WITH DOUBLE GRAVE
        ('\u{0209}', "i"), // ȉ LATIN SMALL LETTER I WITH DOUBLE GRAVE
        ('\u{020A}', "I"), // Ȋ LATIN CAPITAL LETTER I WITH INVERTED BREVE
        ('\u{020B}', "i"), // ȋ LATIN SMALL LETTER I WITH INVERTED BREVE
        ('\u{020C}', "O"), // Ȍ LATIN CAPITAL LETTER O WITH DOUBLE GRAVE
        ('\u{020D}', "o"), // ȍ LATIN SMALL LETTER O WITH DOUBLE GRAVE
        ('\u{020E}', "O"), // Ȏ LATIN CAPITAL LETTER O WITH INVERTED BREVE
        ('\u{020F}', "o"), // ȏ LATIN SMALL LETTER O WITH INVERTED BREVE
        ('\u{0210}', "R"), // Ȑ LATIN CAPITAL LETTER R WITH DOUBLE GRAVE
        ('\u{0211}', "r"), // ȑ LATIN SMALL LETTER R WITH DOUBLE GRAVE
        ('\u{0212}', "R"), // Ȓ LATIN CAPITAL LETTER R WITH INVERTED BREVE
        ('\u{0213}', "r"), // ȓ LATIN SMALL LETTER R WITH INVERTED BREVE
        ('\u{0214}', "U"), // Ȕ LATIN CAPITAL LETTER U WITH DOUBLE GRAVE
        ('\u{0215}', "u"), // ȕ LATIN SMALL LETTER U WITH DOUBLE GRAVE
        ('\u{0216}', "U"), // Ȗ LATIN CAPITAL LETTER U WITH INVERTED BREVE
        ('\u{0217}', "u"), // ȗ LATIN SMALL LETTER U WITH INVERTED BREVE
        ('\u{0218}', "S"), // Ș LATIN CAPITAL LETTER S WITH COMMA BELOW
        ('\u{0219}', "s"), // ș LATIN SMALL LETTER S WITH COMMA BELOW
        ('\u{021A}', "T"), // Ț LATIN CAPITAL LETTER T WITH COMMA BELOW
        ('\u{021B}', "t"), // ț LATIN SMALL LETTER T WITH COMMA BELOW
        ('\u{021E}', "H"), // Ȟ LATIN CAPITAL LETTER H WITH CARON
        ('\u{021F}', "h"), // ȟ LATIN SMALL LETTER H WITH CARON
        ('\u{0220}', "N"), // Ƞ LATIN CAPITAL LETTER N WITH LONG RIGHT LEG
        ('\u{0221}', "d"), // ȡ LATIN SMALL LETTER D WITH CURL
        ('\u{0222}', "Ou"), // Ȣ LATIN CAPITAL LETTER OU
        ('\u{0223}', "ou"), // ȣ LATIN SMALL LETTER OU
        ('\u{0224}', "Z"), // Ȥ LATIN CAPITAL LETTER Z WITH HOOK
        ('\u{0225}', "z"), // ȥ LATIN SMALL LETTER Z WITH HOOK
        ('\u{0226}', "A"), // Ȧ LATIN CAPITAL LETTER A WITH DOT ABOVE
        ('\u{0227}', "a"), // ȧ LATIN SMALL LETTER A WITH DOT ABOVE
        ('\u{0228}', "E"), // Ȩ LATIN CAPITAL LETTER E WITH CEDILLA
        ('\u{0229}', "e"), // ȩ LATIN SMALL LETTER E WITH CEDILLA
        ('\u{022A}', "O"), // Ȫ LATIN CAPITAL LETTER O WITH DIAERESIS AND MACRON
        ('\u{022B}', "o"), // ȫ LATIN SMALL LETTER O WITH DIAERESIS AND MACRON
        ('\u{022C}', "O"), // Ȭ LATIN CAPITAL LETTER O WITH TILDE AND MACRON
        ('\u{022D}', "o"), // ȭ LATIN SMALL LETTER O WITH TILDE AND MACRON
        ('\u{022E}', "O"), // Ȯ LATIN CAPITAL LETTER O WITH DOT ABOVE
        ('\u{022F}', "o"), // ȯ LATIN SMALL LETTER O WITH DOT ABOVE
        ('\u{0230}', "O"), // Ȱ LATIN CAPITAL LETTER O WITH DOT ABOVE AND MACRON
        ('\u{0231}', "o"), // ȱ LATIN SMALL LETTER O WITH DOT ABOVE AND MACRON
        ('\u{0232}', "Y"), // Ȳ LATIN CAPITAL LETTER Y WITH MACRON
        ('\u{0233}', "y"), // ȳ LATIN SMALL LETTER Y WITH MACRON
        ('\u{0234}', "l"), // ȴ LATIN SMALL LETTER L WITH CURL
        ('\u{0235}', "n"), // ȵ LATIN SMALL LETTER N WITH CURL
        ('\u{0236}', "t"), // ȶ LATIN SMALL LETTER T WITH CURL
        ('\u{0237}', "j"), // ȷ LATIN SMALL LETTER DOTLESS J
        ('\u{023A}', "A"), // Ⱥ LATIN CAPITAL LETTER A WITH STROKE
        ('\u{023B}', "C"), // Ȼ LATIN CAPITAL LETTER C WITH STROKE
        ('\u{023C}', "c"), // ȼ LATIN SMALL LETTER C WITH STROKE
        ('\u{023D}', "L"), // Ƚ LATIN CAPITAL LETTER L WITH BAR
        ('\u{023E}', "T"), // Ⱦ LATIN CAPITAL LETTER T WITH DIAGONAL STROKE
        ('\u{023F}', "s"), // ȿ LATIN SMALL LETTER S WITH SWASH TAIL
        ('\u{0240}', "z"), // ɀ LATIN SMALL LETTER Z WITH SWASH TAIL
        ('\u{0243}', "B"), // Ƀ LATIN CAPITAL LETTER B WITH STROKE
        ('\u{0244}', "U"), // Ʉ LATIN CAPITAL LETTER U BAR
        ('\u{0245}', "V"), // Ʌ LATIN CAPITAL LETTER TURNED V
        ('\u{0246}', "E"), // Ɇ LATIN CAPITAL LETTER E WITH STROKE
        ('\u{0247}', "e"), // ɇ LATIN SMALL LETTER E WITH STROKE
        ('\u{0248}', "J"), // Ɉ LATIN CAPITAL LETTER J WITH STROKE
        ('\u{0249}', "j"), // ɉ LATIN SMALL LETTER J WITH STROKE
        ('\u{024A}', "Q"), // Ɋ LATIN CAPITAL LETTER SMALL Q WITH HOOK TAIL
        ('\u{024B}', "q"), // ɋ LATIN SMALL LETTER Q WITH HOOK TAIL
        ('\u{024C}', "R"), // Ɍ LATIN CAPITAL LETTER R WITH STROKE
        ('\u{024D}', "r"), // ɍ LATIN SMALL LETTER R WITH STROKE
        ('\u{024E}', "Y"), // Ɏ LATIN CAPITAL LETTER Y WITH STROKE
        ('\u{024F}', "y"), // ɏ LATIN SMALL LETTER Y WITH STROKE
        ('\u{0250}', "a"), // ɐ LATIN SMALL LETTER TURNED A
        ('\u{0253}', "b"), // ɓ LATIN SMALL LETTER B WITH HOOK
        ('\u{0254}', "o"), // ɔ LATIN SMALL LETTER OPEN O
        ('\u{0255}', "c"), // ɕ LATIN SMALL LETTER C WITH CURL
        ('\u{0256}', "d"), // ɖ LATIN SMALL LETTER D WITH TAIL
        ('\u{0257}', "d"), // ɗ LATIN SMALL LETTER D WITH HOOK
        ('\u{0258}', "e"), // ɘ LATIN SMALL LETTER REVERSED E
        ('\u{025B}', "e"), // ɛ LATIN SMALL LETTER OPEN E
        ('\u{025C}', "e"), // ɜ LATIN SMALL LETTER REVERSED OPEN E
        ('\u{025D}', "e"), // ɝ LATIN SMALL LETTER REVERSED OPEN E WITH HOOK
        ('\u{025E}', "e"), // ɞ LATIN SMALL LETTER CLOSED REVERSED OPEN E
        ('\u{025F}', "j"), // ɟ LATIN SMALL LETTER DOTLESS J WITH STROKE
        ('\u{0260}', "g"), // ɠ LATIN SMALL LETTER G WITH HOOK
        ('\u{0261}', "g"), // ɡ LATIN SMALL LETTER SCRIPT G
        ('\u{0262}', "G"), // ɢ LATIN LETTER SMALL CAPITAL G
        ('\u{0265}', "h"), // ɥ LATIN SMALL LETTER TURNED H
        ('\u{0266}', "h"), // ɦ LATIN SMALL LETTER H WITH HOOK
        ('\u{0268}', "i"), // ɨ LATIN SMALL LETTER I WITH STROKE
        ('\u{026A}', "I"), // ɪ LATIN LETTER SMALL CAPITAL I
        ('\u{026B}', "l"), // ɫ LATIN SMALL LETTER L WITH MIDDLE TILDE
        ('\u{026C}', "l"), // ɬ LATIN SMALL LETTER L WITH BELT
        ('\u{026D}', "l"), // ɭ LATIN SMALL LETTER L WITH RETROFLEX HOOK
        ('\u{026F}', "m"), // ɯ LATIN SMALL LETTER TURNED M
        ('\u{0270}', "m"), // ɰ LATIN SMALL LETTER TURNED M WITH LONG LEG
        ('\u{0271}', "m"), // ɱ LATIN SMALL LETTER M WITH HOOK
        ('\u{0272}', "n"), // ɲ LATIN SMALL LETTER N WITH LEFT HOOK
        ('\u{0273}', "n"), // ɳ LATIN SMALL LETTER N WITH RETROFLEX HOOK
        ('\u{0274}', "N"), // ɴ LATIN LETTER SMALL CAPITAL N
        ('\u{0275}', "o"), // ɵ LATIN SMALL LETTER BARRED O
        ('\u{0276}', "OE"), // ɶ LATIN LETTER SMALL CAPITAL OE
        ('\u{0279}', "r"), // ɹ LATIN SMALL LETTER TURNED R
        ('\u{027A}', "r"), // ɺ LATIN SMALL LETTER TURNED R WITH LONG LEG
        ('\u{027B}', "r"), // ɻ LATIN SMALL LETTER TURNED R WITH HOOK
        ('\u{027C}', "r"), // ɼ LATIN SMALL LETTER R WITH LONG LEG
        ('\u{027D}', "r"), // ɽ LATIN SMALL LETTER R WITH TAIL
        ('\u{027E}', "r"), // ɾ LATIN SMALL LETTER R WITH FISHHOOK
        ('\u{027F}', "r"), // ɿ LATIN SMALL LETTER REVERSED R WITH FISHHOOK
        ('\u{0280}', "R"), // ʀ LATIN LETTER SMALL CAPITAL R
        ('\u{0281}', "R"), // ʁ LATIN LETTER SMALL CAPITAL INVERTED R
        ('\u{0282}', "s"), // ʂ LATIN SMALL LETTER S WITH HOOK
        ('\u{0284}', "j"), // ʄ LATIN SMALL LETTER DOTLESS J WITH STROKE AND HOOK
        ('\u{0287}', "t"), // ʇ LATIN SMALL LETTER TURNED T
        ('\u{0288}', "t"), // ʈ LATIN SMALL LETTER T WITH RETROFLEX HOOK
        ('\u{0289}', "u"), // ʉ LATIN SMALL LETTER U BAR
        ('\u{028B}', "v"), // ʋ LATIN SMALL LETTER V WITH HOOK
        ('\u{028C}', "v"), // ʌ LATIN SMALL LETTER TURNED V
        ('\u{028D}', "w"), // ʍ LATIN SMALL LETTER TURNED W
        ('\u{028E}', "y"), // ʎ LATIN SMALL LETTER TURNED Y
        ('\u{028F}', "Y"), // ʏ LATIN LETTER SMALL CAPITAL Y
        ('\u{0290}', "z"), // ʐ LATIN SMALL LETTER Z WITH RETROFLEX HOOK
        ('\u{0291}', "z"), // ʑ LATIN SMALL LETTER Z WITH CURL
        ('\u{0299}', "B"), // ʙ LATIN LETTER SMALL CAPITAL B
        ('\u{029A}', "e"), // ʚ LATIN SMALL LETTER CLOSED OPEN E
        ('\u{029B}', "G"), // ʛ LATIN LETTER SMALL CAPITAL G WITH HOOK
        ('\u{029C}', "H"), // ʜ LATIN LETTER SMALL CAPITAL H
        ('\u{029D}', "j"), // ʝ LATIN SMALL LETTER J WITH CROSSED-TAIL
        ('\u{029E}', "k"), // ʞ LATIN SMALL LETTER TURNED K
        ('\u{029F}', "L"), // ʟ LATIN LETTER SMALL CAPITAL L
        ('\u{02A0}', "q"), // ʠ LATIN SMALL LETTER Q WITH HOOK
        ('\u{02A3}', "dz"), // ʣ LATIN SMALL LETTER DZ DIGRAPH
        ('\u{02A5}', "dz"), // ʥ LATIN SMALL LETTER DZ DIGRAPH WITH CURL
        ('\u{02A6}', "ts"), // ʦ LATIN SMALL LETTER TS DIGRAPH
        ('\u{02AE}', "h"), // ʮ LATIN SMALL LETTER TURNED H WITH FISHHOOK
        ('\u{02AF}', "h"), // ʯ LATIN SMALL LETTER TURNED H WITH FISHHOOK AND TAIL
        ('\u{0386}', "A"), // Ά GREEK CAPITAL LETTER ALPHA WITH TONOS
        ('\u{0388}', "E"), // Έ GREEK CAPITAL LETTER EPSILON WITH TONOS
        ('\u{0389}', "E"), // Ή GREEK CAPITAL LETTER ETA WITH TONOS
        ('\u{038A}', "I"), // Ί GREEK CAPITAL LETTER IOTA WITH TONOS
        ('\u{038C}', "O"), // Ό GREEK CAPITAL LETTER OMICRON WITH TONOS
        ('\u{038E}', "Y"), // Ύ GREEK CAPITAL LETTER UPSILON WITH TONOS
        ('\u{038F}', "O"), // Ώ GREEK CAPITAL LETTER OMEGA WITH TONOS
        ('\u{0390}', "i"), // ΐ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS
        ('\u{0391}', "A"), // Α GREEK CAPITAL LETTER ALPHA
        ('\u{0392}', "B"), // Β GREEK CAPITAL LETTER BETA
        ('\u{0393}', "G"), // Γ GREEK CAPITAL LETTER GAMMA
        ('\u{0394}', "D"), // Δ GREEK CAPITAL LETTER DELTA
        ('\u{0395}', "E"), // Ε GREEK CAPITAL LETTER EPSILON
        ('\u{0396}', "Z"), // Ζ GREEK CAPITAL LETTER ZETA
        ('\u{0397}', "E"), // Η GREEK CAPITAL LETTER ETA
        ('\u{0398}', "Th"), // Θ GREEK CAPITAL LETTER THETA
        ('\u{0399}', "I"), // Ι GREEK CAPITAL LETTER IOTA
        ('\u{039A}', "K"), // Κ GREEK CAPITAL LETTER KAPPA
        ('\u{039B}', "L"), // Λ GREEK CAPITAL LETTER LAMDA
        ('\u{039C}', "M"), // Μ GREEK CAPITAL LETTER MU
        ('\u{039D}', "N"), // Ν GREEK CAPITAL LETTER NU
        ('\u{039E}', "X"), // Ξ GREEK CAPITAL LETTER XI
        ('\u{039F}', "O"), // Ο GREEK CAPITAL LETTER OMICRON
        ('\u{03A0}', "P"), // Π GREEK CAPITAL LETTER PI
        ('\u{03A1}', "R"), // Ρ GREEK CAPITAL LETTER RHO
        ('\u{03A3}', "S"), // Σ GREEK CAPITAL LETTER SIGMA
        ('\u{03A4}', "T"), // Τ GREEK CAPITAL LETTER TAU
        ('\u{03A5}', "Y"), // Υ GREEK CAPITAL LETTER UPSILON
        ('\u{03A6}', "Ph"), // Φ GREEK CAPITAL LETTER PHI
        ('\u{03A7}', "Ch"), // Χ GREEK CAPITAL LETTER CHI
        ('\u{03A8}', "Ps"), // Ψ GREEK CAPITAL LETTER PSI
        ('\u{03A9}', "O"), // Ω GREEK CAPITAL LETTER OMEGA
        ('\u{03AA}', "I"), // Ϊ GREEK CAPITAL LETTER IOTA WITH DIALYTIKA
        ('\u{03AB}', "Y"), // Ϋ GREEK CAPITAL LETTER UPSILON WITH DIALYTIKA
        ('\u{03AC}', "a"), // ά GREEK SMALL LETTER ALPHA WITH TONOS
        ('\u{03AD}', "e"), // έ GREEK SMALL LETTER EPSILON WITH TONOS
        ('\u{03AE}', "e"), // ή GREEK SMALL LETTER ETA WITH TONOS
        ('\u{03AF}', "i"), // ί GREEK SMALL LETTER IOTA WITH TONOS
        ('\u{03B0}', "y"), // ΰ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS
        ('\u{03B1}', "a"), // α GREEK SMALL LETTER ALPHA
        ('\u{03B2}', "b"), // β GREEK SMALL LETTER BETA
        ('\u{03B3}', "g"), // γ GREEK SMALL LETTER GAMMA
        ('\u{03B4}', "d"), // δ GREEK SMALL LETTER DELTA
        ('\u{03B5}', "e"), // ε GREEK SMALL LETTER EPSILON
        ('\u{03B6}', "z"), // ζ GREEK SMALL LETTER ZETA
        ('\u{03B7}', "e"), // η GREEK SMALL LETTER ETA
        ('\u{03B8}', "th"), // θ GREEK SMALL LETTER THETA
        ('\u{03B9}', "i"), // ι GREEK SMALL LETTER IOTA
        ('\u{03BA}', "k"), // κ GREEK SMALL LETTER KAPPA
        ('\u{03BB}', "l"), // λ GREEK SMALL LETTER LAMDA
        ('\u{03BC}', "m"), // μ GREEK SMALL LETTER MU
        ('\u{03BD}', "n"), // ν GREEK SMALL LETTER NU
        ('\u{03BE}', "x"), // ξ GREEK SMALL LETTER XI
        ('\u{03BF}', "o"), // ο GREEK SMALL LETTER OMICRON
        ('\u{03C0}', "p"), // π GREEK SMALL LETTER PI
        ('\u{03C1}', "r"), // ρ GREEK SMALL LETTER RHO
        ('\u{03C2}', "s"), // ς GREEK SMALL LETTER FINAL SIGMA
        ('\u{03C3}', "s"), // σ GREEK SMALL LETTER SIGMA
        ('\u{03C4}', "t"), // τ GREEK SMALL LETTER TAU
        ('\u{03C5}', "y"), // υ GREEK SMALL LETTER UPSILON
        ('\u{03C6}', "ph"), // φ GREEK SMALL LETTER PHI
        ('\u{03C7}', "ch"), // χ GREEK SMALL LETTER CHI
        ('\u{03C8}', "ps"), // ψ GREEK SMALL LETTER PSI
        ('\u{03C9}', "o"), // ω GREEK SMALL LETTER OMEGA
        ('\u{03CA}', "i"), // ϊ GREEK SMALL LETTER IOTA WITH DIALYTIKA
        ('\u{03CB}', "y"), // ϋ GREEK SMALL LETTER UPSILON WITH DIALYTIKA
        ('\u{03CC}', "o"), // ό GREEK SMALL LETTER OMICRON WITH TONOS
        ('\u{03CD}', "y"), // ύ GREEK SMALL LETTER UPSILON WITH TONOS
        ('\u{03CE}', "o"), // ώ GREEK SMALL LETTER OMEGA WITH TONOS
        ('\u{03D0}', "b"), // ϐ GREEK BETA SYMBOL
        ('\u{03D1}', "th"), // ϑ GREEK THETA SYMBOL
        ('\u{03D2}', "y"), // ϒ GREEK UPSILON WITH HOOK SYMBOL
        ('\u{03D3}', "y"), // ϓ GREEK UPSILON WITH ACUTE AND HOOK SYMBOL
        ('\u{03D4}', "y"), // ϔ GREEK UPSILON WITH DIAERESIS AND HOOK SYMBOL
        ('\u{03D5}', "ph"), // ϕ GREEK PHI SYMBOL
        ('\u{03D6}', "p"), // ϖ GREEK PI SYMBOL
        ('\u{03F0}', "k"), // ϰ GREEK KAPPA SYMBOL
        ('\u{03F1}', "r"), // ϱ GREEK RHO SYMBOL
        ('\u{03F2}', "s"), // ϲ GREEK LUNATE SIGMA SYMBOL
        ('\u{03F4}', "Th"), // ϴ GREEK CAPITAL THETA SYMBOL
        ('\u{03F5}', "e"), // ϵ GREEK LUNATE EPSILON SYMBOL
        ('\u{03F9}', "S"), // Ϲ GREEK CAPITAL LUNATE SIGMA SYMBOL
        ('\u{03FC}', "r"), // ϼ GREEK RHO WITH STROKE SYMBOL
        ('\u{0401}', "E"), // Ё CYRILLIC CAPITAL LETTER IO
        ('\u{0402}', "Dj"), // Ђ CYRILLIC CAPITAL LETTER DJE
        ('\u{0404}', "Ie"), // Є CYRILLIC CAPITAL LETTER UKRAINIAN IE
        ('\u{0406}', "I"), // І CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I
        ('\u{0407}', "I"), // Ї CYRILLIC CAPITAL LETTER YI
        ('\u{0408}', "J"), // Ј CYRILLIC CAPITAL LETTER JE
        ('\u{0409}', "Lj"), // Љ CYRILLIC CAPITAL LETTER LJE
        ('\u{040A}', "Nj"), // Њ CYRILLIC CAPITAL LETTER NJE
        ('\u{040B}', "C"), // Ћ CYRILLIC CAPITAL LETTER TSHE
        ('\u{040E}', "U"), // Ў CYRILLIC CAPITAL LETTER SHORT U
        ('\u{040F}', "Dz"), // Џ CYRILLIC CAPITAL LETTER DZHE
        ('\u{0410}', "A"), // А CYRILLIC CAPITAL LETTER A
        ('\u{0411}', "B"), // Б CYRILLIC CAPITAL LETTER BE
        ('\u{0412}', "V"), // В CYRILLIC CAPITAL LETTER VE
        ('\u{0413}', "G"), // Г CYRILLIC CAPITAL LETTER GHE
        ('\u{0414}', "D"), // Д CYRILLIC CAPITAL LETTER DE
        ('\u{0415}', "E"), // Е CYRILLIC CAPITAL LETTER IE
        ('\u{0416}', "Zh"), // Ж CYRILLIC CAPITAL LETTER ZHE
        ('\u{0417}', "Z"), // З CYRILLIC CAPITAL LETTER ZE
        ('\u{0418}', "I"), // И CYRILLIC CAPITAL LETTER I
        ('\u{0419}', "I"), // Й CYRILLIC CAPITAL LETTER SHORT I
        ('\u{041A}', "K"), // К CYRILLIC CAPITAL LETTER KA
        ('\u{041B}', "L"), // Л CYRILLIC CAPITAL LETTER EL
        ('\u{041C}', "M"), // М CYRILLIC CAPITAL LETTER EM
        ('\u{041D}', "N"), // Н CYRILLIC CAPITAL LETTER EN
        ('\u{041E}', "O"), // О CYRILLIC CAPITAL LETTER O
        ('\u{041F}', "P"), // П CYRILLIC CAPITAL LETTER PE
        ('\u{0420}', "R"), // Р CYRILLIC CAPITAL LETTER ER
        ('\u{0421}', "S"), // С CYRILLIC CAPITAL LETTER ES
        ('\u{0422}', "T"), // Т CYRILLIC CAPITAL LETTER TE
        ('\u{0423}', "U"), // У CYRILLIC CAPITAL LETTER U
        ('\u{0424}', "F"), // Ф CYRILLIC CAPITAL LETTER EF
        ('\u{0425}', "Kh"), // Х CYRILLIC CAPITAL LETTER HA
        ('\u{0426}', "Ts"), // Ц CYRILLIC CAPITAL LETTER TSE
        ('\u{0427}', "Ch"), // Ч CYRILLIC CAPITAL LETTER CHE
        ('\u{0428}', "Sh"), // Ш CYRILLIC CAPITAL LETTER SHA
        ('\u{0429}', "Shch"), // Щ CYRILLIC CAPITAL LETTER SHCHA
        ('\u{042A}', ""), // Ъ CYRILLIC CAPITAL LETTER HARD SIGN
        ('\u{042B}', "Y"), // Ы CYRILLIC CAPITAL LETTER YERU
        ('\u{042C}', ""), // Ь CYRILLIC CAPITAL LETTER SOFT SIGN
        ('\u{042D}', "E"), // Э CYRILLIC CAPITAL LETTER E
        ('\u{042E}', "Iu"), // Ю CYRILLIC CAPITAL LETTER YU
        ('\u{042F}', "Ia"), // Я CYRILLIC CAPITAL LETTER YA
        ('\u{0430}', "a"), // а CYRILLIC SMALL LETTER A
        ('\u{0431}', "b"), // б CYRILLIC SMALL LETTER BE
        ('\u{0432}', "v"), // в CYRILLIC SMALL LETTER VE
        ('\u{0433}', "g"), // г CYRILLIC SMALL LETTER GHE
        ('\u{0434}', "d"), // д CYRILLIC SMALL LETTER DE
        ('\u{0435}', "e"), // е CYRILLIC SMALL LETTER IE
        ('\u{0436}', "zh"), // ж CYRILLIC SMALL LETTER ZHE
        ('\u{0437}', "z"), // з CYRILLIC SMALL LETTER ZE
        ('\u{0438}', "i"), // и CYRILLIC SMALL LETTER I
        ('\u{0439}', "i"), // й CYRILLIC SMALL LETTER SHORT I
        ('\u{043A}', "k"), // к CYRILLIC SMALL LETTER KA
        ('\u{043B}', "l"), // л CYRILLIC SMALL LETTER EL
        ('\u{043C}', "m"), // м CYRILLIC SMALL LETTER EM
        ('\u{043D}', "n"), // н CYRILLIC SMALL LETTER EN
        ('\u{043E}', "o"), // о CYRILLIC SMALL LETTER O
        ('\u{043F}', "p"), // п CYRILLIC SMALL LETTER PE
        ('\u{0440}', "r"), // р CYRILLIC SMALL LETTER ER
        ('\u{0441}', "s"), // с CYRILLIC SMALL LETTER ES
        ('\u{0442}', "t"), // т CYRILLIC SMALL LETTER TE
        ('\u{0443}', "u"), // у CYRILLIC SMALL LETTER U
        ('\u{0444}', "f"), // ф CYRILLIC SMALL LETTER EF
        ('\u{0445}', "kh"), // х CYRILLIC SMALL LETTER HA
        ('\u{0446}', "ts"), // ц CYRILLIC SMALL LETTER TSE
        ('\u{0447}', "ch"), // ч CYRILLIC SMALL LETTER CHE
        ('\u{0448}', "sh"), // ш CYRILLIC SMALL LETTER SHA
        ('\u{0449}', "shch"), // щ CYRILLIC SMALL LETTER SHCHA
        ('\u{044A}', ""), // ъ CYRILLIC SMALL LETTER HARD SIGN
        ('\u{044B}', "y"), // ы CYRILLIC SMALL LETTER YERU
        ('\u{044C}', ""), // ь CYRILLIC SMALL LETTER SOFT SIGN
        ('\u{044D}', "e"), // э CYRILLIC SMALL LETTER E
        ('\u{044E}', "iu"), // ю CYRILLIC SMALL LETTER YU
        ('\u{044F}', "ia"), // я CYRILLIC SMALL LETTER YA
        ('\u{0451}', "e"), // ё CYRILLIC SMALL LETTER IO
        ('\u{0452}', "dj"), // ђ CYRILLIC SMALL LETTER DJE
        ('\u{0454}', "ie"), // є CYRILLIC SMALL LETTER UKRAINIAN IE
        ('\u{0456}', "i"), // і CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I
        ('\u{0457}', "i"), // ї CYRILLIC SMALL LETTER YI
        ('\u{0458}', "j"), // ј CYRILLIC SMALL LETTER JE
        ('\u{0459}', "lj"), // љ CYRILLIC SMALL LETTER LJE
        ('\u{045A}', "nj"), // њ CYRILLIC SMALL LETTER NJE
        ('\u{045B}', "c"), // ћ CYRILLIC SMALL LETTER TSHE
        ('\u{045E}', "u"), // ў CYRILLIC SMALL LETTER SHORT U
        ('\u{045F}', "dz"), // џ CYRILLIC SMALL LETTER DZHE
        ('\u{0490}', "G"), // Ґ CYRILLIC CAPITAL LETTER GHE WITH UPTURN
        ('\u{0491}', "g"), // ґ CYRILLIC SMALL LETTER GHE WITH UPTURN
        ('\u{1D00}', "A"), // ᴀ LATIN LETTER SMALL CAPITAL A
        ('\u{1D01}', "AE"), // ᴁ LATIN LETTER SMALL CAPITAL AE
        ('\u{1D02}', "ae"), // ᴂ LATIN SMALL LETTER TURNED AE
        ('\u{1D03}', "B"), // ᴃ LATIN LETTER SMALL CAPITAL BARRED B
        ('\u{1D04}', "C"), // ᴄ LATIN LETTER SMALL CAPITAL C
        ('\u{1D05}', "D"), // ᴅ LATIN LETTER SMALL CAPITAL D
        ('\u{1D07}', "E"), // ᴇ LATIN LETTER SMALL CAPITAL E
        ('\u{1D08}', "e"), // ᴈ LATIN SMALL LETTER TURNED OPEN E
        ('\u{1D09}', "i"), // ᴉ LATIN SMALL LETTER TURNED I
        ('\u{1D0A}', "J"), // ᴊ LATIN LETTER SMALL CAPITAL J
        ('\u{1D0B}', "K"), // ᴋ LATIN LETTER SMALL CAPITAL K
        ('\u{1D0C}', "L"), // ᴌ LATIN LETTER SMALL CAPITAL L WITH STROKE
        ('\u{1D0D}', "M"), // ᴍ LATIN LETTER SMALL CAPITAL M
        ('\u{1D0E}', "N"), // ᴎ LATIN LETTER SMALL CAPITAL REVERSED N
        ('\u{1D0F}', "O"), // ᴏ LATIN LETTER SMALL CAPITAL O
        ('\u{1D10}', "O"), // ᴐ LATIN LETTER SMALL CAPITAL OPEN O
        ('\u{1D11}', "o"), // ᴑ LATIN SMALL LETTER SIDEWAYS O
        ('\u{1D12}', "o"), // ᴒ LATIN SMALL LETTER SIDEWAYS OPEN O
        ('\u{1D13}', "o"), // ᴓ LATIN SMALL LETTER SIDEWAYS O WITH STROKE
        ('\u{1D14}', "oe"), // ᴔ LATIN SMALL LETTER TURNED OE
        ('\u{1D15}', "OU"), // ᴕ LATIN LETTER SMALL CAPITAL OU
        ('\u{1D16}', "o"), // ᴖ LATIN SMALL LETTER TOP HALF O
        ('\u{1D17}', "o"), // ᴗ LATIN SMALL LETTER BOTTOM HALF O
        ('\u{1D18}', "P"), // ᴘ LATIN LETTER SMALL CAPITAL P
        ('\u{1D19}', "R"), // ᴙ LATIN LETTER SMALL CAPITAL REVERSED R
        ('\u{1D1A}', "R"), // ᴚ LATIN LETTER SMALL CAPITAL TURNED R
        ('\u{1D1B}', "T"), // ᴛ LATIN LETTER SMALL CAPITAL T
        ('\u{1D1C}', "U"), // ᴜ LATIN LETTER SMALL CAPITAL U
        ('\u{1D1D}', "u"), // ᴝ LATIN SMALL LETTER SIDEWAYS U
        ('\u{1D1E}', "u"), // ᴞ LATIN SMALL LETTER SIDEWAYS DIAERESIZED U
        ('\u{1D1F}', "m"), // ᴟ LATIN SMALL LETTER SIDEWAYS TURNED M
        ('\u{1D20}', "V"), // ᴠ LATIN LETTER SMALL CAPITAL V
        ('\u{1D21}', "W"), // ᴡ LATIN LETTER SMALL CAPITAL W
        ('\u{1D22}', "Z"), // ᴢ LATIN LETTER SMALL CAPITAL Z
        ('\u{1D5D}', "b"), // ᵝ MODIFIER LETTER SMALL BETA
        ('\u{1D5F}', "d"), // ᵟ MODIFIER LETTER SMALL DELTA
        ('\u{1D61}', "ch"), // ᵡ MODIFIER LETTER SMALL CHI
        ('\u{1D62}', "i"), // ᵢ LATIN SUBSCRIPT SMALL LETTER I
        ('\u{1D63}', "r"), // ᵣ LATIN SUBSCRIPT SMALL LETTER R
        ('\u{1D64}', "u"), // ᵤ LATIN SUBSCRIPT SMALL LETTER U
        ('\u{1D65}', "v"), // ᵥ LATIN SUBSCRIPT SMALL LETTER V
        ('\u{1D66}', "b"), // ᵦ GREEK SUBSCRIPT SMALL LETTER BETA
        ('\u{1D67}', "g"), // ᵧ GREEK SUBSCRIPT SMALL LETTER GAMMA
        ('\u{1D68}', "r"), // ᵨ GREEK SUBSCRIPT SMALL LETTER RHO
        ('\u{1D69}', "ph"), // ᵩ GREEK SUBSCRIPT SMALL LETTER PHI
        ('\u{1D6A}', "ch"), // ᵪ GREEK SUBSCRIPT SMALL LETTER CHI
        ('\u{1D6B}', "ue"), // ᵫ LATIN SMALL LETTER UE
        ('\u{1D6C}', "b"), // ᵬ LATIN SMALL LETTER B WITH MIDDLE TILDE
        ('\u{1D6D}', "d"), // ᵭ LATIN SMALL LETTER D WITH MIDDLE TILDE
        ('\u{1D6E}', "f"), // ᵮ LATIN SMALL LETTER F WITH MIDDLE TILDE
        ('\u{1D6F}', "m"), // ᵯ LATIN SMALL LETTER M WITH MIDDLE TILDE
        ('\u{1D70}', "n"), // ᵰ LATIN SMALL LETTER N WITH MIDDLE TILDE
        ('\u{1D71}', "p"), // ᵱ LATIN SMALL LETTER P WITH MIDDLE TILDE
        ('\u{1D72}', "r"), // ᵲ LATIN SMALL LETTER R WITH MIDDLE TILDE
        ('\u{1D73}', "r"), // ᵳ LATIN SMALL LETTER R WITH FISHHOOK AND MIDDLE TILDE
        ('\u{1D74}', "s"), // ᵴ LATIN SMALL LETTER S WITH MIDDLE TILDE
        ('\u{1D75}', "t"), // ᵵ LATIN SMALL LETTER T WITH MIDDLE TILDE
        ('\u{1D76}', "z"), // ᵶ LATIN SMALL LETTER Z WITH MIDDLE TILDE
        ('\u{1D77}', "g"), // ᵷ LATIN SMALL LETTER TURNED G
        ('\u{1D79}', "g"), // ᵹ LATIN SMALL LETTER INSULAR G
        ('\u{1D7D}', "p"), // ᵽ LATIN SMALL LETTER P WITH STROKE
        ('\u{1E00}', "A"), // Ḁ LATIN CAPITAL LETTER A WITH RING BELOW
        ('\u{1E01}', "a"), // ḁ LATIN SMALL LETTER A WITH RING BELOW
        ('\u{1E02}', "B"), // Ḃ LATIN CAPITAL LETTER B WITH DOT ABOVE
        ('\u{1E03}', "b"), // ḃ LATIN SMALL LETTER B WITH DOT ABOVE
        ('\u{1E04}', "B"), // Ḅ LATIN CAPITAL LETTER B WITH DOT BELOW
        ('\u{1E05}', "b"), // ḅ LATIN SMALL LETTER B WITH DOT BELOW
        ('\u{1E06}', "B"), // Ḇ LATIN CAPITAL LETTER B WITH LINE BELOW
        ('\u{1E07}', "b"), // ḇ LATIN SMALL LETTER B WITH LINE BELOW
        ('\u{1E08}', "C"), // Ḉ LATIN CAPITAL LETTER C WITH CEDILLA AND ACUTE
        ('\u{1E09}', "c"), // ḉ LATIN SMALL LETTER C WITH CEDILLA AND ACUTE
        ('\u{1E0A}', "D"), // Ḋ LATIN CAPITAL LETTER D WITH DOT ABOVE
        ('\u{1E0B}', "d"), // ḋ LATIN SMALL LETTER D WITH DOT ABOVE
        ('\u{1E0C}', "D"), // Ḍ LATIN CAPITAL LETTER D WITH DOT BELOW
        ('\u{1E0D}', "d"), // ḍ LATIN SMALL LETTER D WITH DOT BELOW
        ('\u{1E0E}', "D"), // Ḏ LATIN CAPITAL LETTER D WITH LINE BELOW
        ('\u{1E0F}', "d"), // ḏ LATIN SMALL LETTER D WITH LINE BELOW
        ('\u{1E10}', "D"), // Ḑ LATIN CAPITAL LETTER D WITH CEDILLA
        ('\u{1E11}', "d"), // ḑ LATIN SMALL LETTER D WITH CEDILLA
        ('\u{1E12}', "D"), // Ḓ LATIN CAPITAL LETTER D WITH CIRCUMFLEX BELOW
        ('\u{1E13}', "d"), // ḓ LATIN SMALL LETTER D WITH CIRCUMFLEX BELOW
        ('\u{1E14}', "E"), // Ḕ LATIN CAPITAL LETTER E WITH MACRON AND GRAVE
        ('\u{1E15}', "e"), // ḕ LATIN SMALL LETTER E WITH MACRON AND GRAVE
        ('\u{1E16}', "E"), // Ḗ LATIN CAPITAL LETTER E WITH MACRON AND ACUTE
        ('\u{1E17}', "e"), // ḗ LATIN SMALL LETTER E WITH MACRON AND ACUTE
        ('\u{1E18}', "E"), // Ḙ LATIN CAPITAL LETTER E WITH CIRCUMFLEX BELOW
        ('\u{1E19}', "e"), // ḙ LATIN SMALL LETTER E WITH CIRCUMFLEX BELOW
        ('\u{1E1A}', "E"), // Ḛ LATIN CAPITAL LETTER E WITH TILDE BELOW
        ('\u{1E1B}', "e"), // ḛ LATIN SMALL LETTER E WITH TILDE BELOW
        ('\u{1E1C}', "E"), // Ḝ LATIN CAPITAL LETTER E WITH CEDILLA AND BREVE
        ('\u{1E1D}', "e"), // ḝ LATIN SMALL LETTER E WITH CEDILLA AND BREVE
        ('\u{1E1E}', "F"), // Ḟ LATIN CAPITAL LETTER F WITH DOT ABOVE
        ('\u{1E1F}', "f"), // ḟ LATIN SMALL LETTER F WITH DOT ABOVE
        ('\u{1E20}', "G"), // Ḡ LATIN CAPITAL LETTER G WITH MACRON
        ('\u{1E21}', "g"), // ḡ LATIN SMALL LETTER G WITH MACRON
        ('\u{1E22}', "H"), // Ḣ LATIN CAPITAL LETTER H WITH DOT ABOVE
        ('\u{1E23}', "h"), // ḣ LATIN SMALL LETTER H WITH DOT ABOVE
        ('\u{1E24}', "H"), // Ḥ LATIN CAPITAL LETTER H WITH DOT BELOW
        ('\u{1E25}', "h"), // ḥ LATIN SMALL LETTER H WITH DOT BELOW
        ('\u{1E26}', "H"), // Ḧ LATIN CAPITAL LETTER H WITH DIAERESIS
        ('\u{1E27}', "h"), // ḧ LATIN SMALL LETTER H WITH DIAERESIS
        ('\u{1E28}', "H"), // Ḩ LATIN CAPITAL LETTER H WITH CEDILLA
        ('\u{1E29}', "h"), // ḩ LATIN SMALL LETTER H WITH CEDILLA
        ('\u{1E2A}', "H"), // Ḫ LATIN CAPITAL LETTER H WITH BREVE BELOW
        ('\u{1E2B}', "h"), // ḫ LATIN SMALL LETTER H WITH BREVE BELOW
        ('\u{1E2C}', "I"), // Ḭ LATIN CAPITAL LETTER I WITH TILDE BELOW
        ('\u{1E2D}', "i"), // ḭ LATIN SMALL LETTER I WITH TILDE BELOW
        ('\u{1E2E}', "I"), // Ḯ LATIN CAPITAL LETTER I WITH DIAERESIS AND ACUTE
        ('\u{1E2F}', "i"), // ḯ LATIN SMALL LETTER I WITH DIAERESIS AND ACUTE
        ('\u{1E30}', "K"), // Ḱ LATIN CAPITAL LETTER K WITH ACUTE
        ('\u{1E31}', "k"), // ḱ LATIN SMALL LETTER K WITH ACUTE
        ('\u{1E32}', "K"), // Ḳ LATIN CAPITAL LETTER K WITH DOT BELOW
        ('\u{1E33}', "k"), // ḳ LATIN SMALL LETTER K WITH DOT BELOW
        ('\u{1E34}', "K"), // Ḵ LATIN CAPITAL LETTER K WITH LINE BELOW
        ('\u{1E35}', "k"), // ḵ LATIN SMALL LETTER K WITH LINE BELOW
        ('\u{1E36}', "L"), // Ḷ LATIN CAPITAL LETTER L WITH DOT BELOW
        ('\u{1E37}', "l"), // ḷ LATIN SMALL LETTER L WITH DOT BELOW
        ('\u{1E38}', "L"), // Ḹ LATIN CAPITAL LETTER L WITH DOT BELOW AND MACRON
        ('\u{1E39}', "l"), // ḹ LATIN SMALL LETTER L WITH DOT BELOW AND MACRON
        ('\u{1E3A}', "L"), // Ḻ LATIN CAPITAL LETTER L WITH LINE BELOW
        ('\u{1E3B}', "l"), // ḻ LATIN SMALL LETTER L WITH LINE BELOW
        ('\u{1E3C}', "L"), // Ḽ LATIN CAPITAL LETTER L WITH CIRCUMFLEX BELOW
        ('\u{1E3D}', "l"), // ḽ LATIN SMALL LETTER L WITH CIRCUMFLEX BELOW
        ('\u{1E3E}', "M"), // Ḿ LATIN CAPITAL LETTER M WITH ACUTE
        ('\u{1E3F}', "m"), // ḿ LATIN SMALL LETTER M WITH ACUTE
        ('\u{1E40}', "M"), // Ṁ LATIN CAPITAL LETTER M WITH DOT ABOVE
        ('\u{1E41}', "m"), // ṁ LATIN SMALL LETTER M WITH DOT ABOVE
        ('\u{1E42}', "M"), // Ṃ LATIN CAPITAL LETTER M WITH DOT BELOW
        ('\u{1E43}', "m"), // ṃ LATIN SMALL LETTER M WITH DOT BELOW
        ('\u{1E44}', "N"), // Ṅ LATIN CAPITAL LETTER N WITH DOT ABOVE
        ('\u{1E45}', "n"), // ṅ LATIN SMALL LETTER N WITH DOT ABOVE
        ('\u{1E46}', "N"), // Ṇ LATIN CAPITAL LETTER N WITH DOT BELOW
        ('\u{1E47}', "n"), // ṇ LATIN SMALL LETTER N WITH DOT BELOW
        ('\u{1E48}', "N"), // Ṉ LATIN CAPITAL LETTER N WITH LINE BELOW
        ('\u{1E49}', "n"), // ṉ LATIN SMALL LETTER N WITH LINE BELOW
        ('\u{1E4A}', "N"), // Ṋ LATIN CAPITAL LETTER N WITH CIRCUMFLEX BELOW
        ('\u{1E4B}', "n"), // ṋ LATIN SMALL LETTER N WITH CIRCUMFLEX BELOW
        ('\u{1E4C}', "O"), // Ṍ LATIN CAPITAL LETTER O WITH TILDE AND ACUTE
        ('\u{1E4D}', "o"), // ṍ LATIN SMALL LETTER O WITH TILDE AND ACUTE
        ('\u{1E4E}', "O"), // Ṏ LATIN CAPITAL LETTER O WITH TILDE AND DIAERESIS
        ('\u{1E4F}', "o"), // ṏ LATIN SMALL LETTER O WITH TILDE AND DIAERESIS
        ('\u{1E50}', "O"), // Ṑ LATIN CAPITAL LETTER O WITH MACRON AND GRAVE
        ('\u{1E51}', "o"), // ṑ LATIN SMALL LETTER O WITH MACRON AND GRAVE
        ('\u{1E52}', "O"), // Ṓ LATIN CAPITAL LETTER O WITH MACRON AND ACUTE
        ('\u{1E53}', "o"), // ṓ LATIN SMALL LETTER O WITH MACRON AND ACUTE
        ('\u{1E54}', "P"), // Ṕ LATIN CAPITAL LETTER P WITH ACUTE
        ('\u{1E55}', "p"), // ṕ LATIN SMALL LETTER P WITH ACUTE
        ('\u{1E56}', "P"), // Ṗ LATIN CAPITAL LETTER P WITH DOT ABOVE
        ('\u{1E57}', "p"), // ṗ LATIN SMALL LETTER P WITH DOT ABOVE
        ('\u{1E58}', "R"), // Ṙ LATIN CAPITAL LETTER R WITH DOT ABOVE
        ('\u{1E59}', "r"), // ṙ LATIN SMALL LETTER R WITH DOT ABOVE
        ('\u{1E5A}', "R"), // Ṛ LATIN CAPITAL LETTER R WITH DOT BELOW
        ('\u{1E5B}', "r"), // ṛ LATIN SMALL LETTER R WITH DOT BELOW
        ('\u{1E5C}', "R"), // Ṝ LATIN CAPITAL LETTER R WITH DOT BELOW AND MACRON
        ('\u{1E5D}', "r"), // ṝ LATIN SMALL LETTER R WITH DOT BELOW AND MACRON
        ('\u{1E5E}', "R"), // Ṟ LATIN CAPITAL LETTER R WITH LINE BELOW
        ('\u{1E5F}', "r"), // ṟ LATIN SMALL LETTER R WITH LINE BELOW
        ('\u{1E60}', "S"), // Ṡ LATIN CAPITAL LETTER S WITH DOT ABOVE
        ('\u{1E61}', "s"), // ṡ LATIN SMALL LETTER S WITH DOT ABOVE
        ('\u{1E62}', "S"), // Ṣ LATIN CAPITAL LETTER S WITH DOT BELOW
        ('\u{1E63}', "s"), // ṣ LATIN SMALL LETTER S WITH DOT BELOW
        ('\u{1E64}', "S"), // Ṥ LATIN CAPITAL LETTER S WITH ACUTE AND DOT ABOVE
        ('\u{1E65}', "s"), // ṥ LATIN SMALL LETTER S WITH ACUTE AND DOT ABOVE
        ('\u{1E66}', "S"), // Ṧ LATIN CAPITAL LETTER S WITH CARON AND DOT ABOVE
        ('\u{1E67}', "s"), // ṧ LATIN SMALL LETTER S WITH CARON AND DOT ABOVE
        ('\u{1E68}', "S"), // Ṩ LATIN CAPITAL LETTER S WITH DOT BELOW AND DOT ABOVE
        ('\u{1E69}', "s"), // ṩ LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE
        ('\u{1E6A}', "T"), // Ṫ LATIN CAPITAL LETTER T WITH DOT ABOVE
        ('\u{1E6B}', "t"), // ṫ LATIN SMALL LETTER T WITH DOT ABOVE
        ('\u{1E6C}', "T"), // Ṭ LATIN CAPITAL LETTER T WITH DOT BELOW
        ('\u{1E6D}', "t"), // ṭ LATIN SMALL LETTER T WITH DOT BELOW
        ('\u{1E6E}', "T"), // Ṯ LATIN CAPITAL LETTER T WITH LINE BELOW
        ('\u{1E6F}', "t"), // ṯ LATIN SMALL LETTER T WITH LINE BELOW
        ('\u{1E70}', "T"), // Ṱ LATIN CAPITAL LETTER T WITH CIRCUMFLEX BELOW
        ('\u{1E71}', "t"), // ṱ LATIN SMALL LETTER T WITH CIRCUMFLEX BELOW
        ('\u{1E72}', "U"), // Ṳ LATIN CAPITAL LETTER U WITH DIAERESIS BELOW
        ('\u{1E73}', "u"), // ṳ LATIN SMALL LETTER U WITH DIAERESIS BELOW
        ('\u{1E74}', "U"), // Ṵ LATIN CAPITAL LETTER U WITH TILDE BELOW
        ('\u{1E75}', "u"), // ṵ LATIN SMALL LETTER U WITH TILDE BELOW
        ('\u{1E76}', "U"), // Ṷ LATIN CAPITAL LETTER U WITH CIRCUMFLEX BELOW
        ('\u{1E77}', "u"), // ṷ LATIN SMALL LETTER U WITH CIRCUMFLEX BELOW
        ('\u{1E78}', "U"), // Ṹ LATIN CAPITAL LETTER U WITH TILDE AND ACUTE
        ('\u{1E79}', "u"), // ṹ LATIN SMALL LETTER U WITH TILDE AND ACUTE
        ('\u{1E7A}', "U"), // Ṻ LATIN CAPITAL LETTER U WITH MACRON AND DIAERESIS
        ('\u{1E7B}', "u"), // ṻ LATIN SMALL LETTER U WITH MACRON AND DIAERESIS
        ('\u{1E7C}', "V"), // Ṽ LATIN CAPITAL LETTER V WITH TILDE
        ('\u{1E7D}', "v"), // ṽ LATIN SMALL LETTER V WITH TILDE
        ('\u{1E7E}', "V"), // Ṿ LATIN CAPITAL LETTER V WITH DOT BELOW
        ('\u{1E7F}', "v"), // ṿ LATIN SMALL LETTER V WITH DOT BELOW
        ('\u{1E80}', "W"), // Ẁ LATIN CAPITAL LETTER W WITH GRAVE
        ('\u{1E81}', "w"), // ẁ LATIN SMALL LETTER W WITH GRAVE
        ('\u{1E82}', "W"), // Ẃ LATIN CAPITAL LETTER W WITH ACUTE
        ('\u{1E83}', "w"), // ẃ LATIN SMALL LETTER W WITH ACUTE
        ('\u{1E84}', "W"), // Ẅ LATIN CAPITAL LETTER W WITH DIAERESIS
        ('\u{1E85}', "w"), // ẅ LATIN SMALL LETTER W WITH DIAERESIS
        ('\u{1E86}', "W"), // Ẇ LATIN CAPITAL LETTER W WITH DOT ABOVE
        ('\u{1E87}', "w"), // ẇ LATIN SMALL LETTER W WITH DOT ABOVE
        ('\u{1E88}', "W"), // Ẉ LATIN CAPITAL LETTER W WITH DOT BELOW
        ('\u{1E89}', "w"), // ẉ LATIN SMALL LETTER W WITH DOT BELOW
        ('\u{1E8A}', "X"), // Ẋ LATIN CAPITAL LETTER X WITH DOT ABOVE
        ('\u{1E8B}', "x"), // ẋ LATIN SMALL LETTER X WITH DOT ABOVE
        ('\u{1E8C}', "X"), // Ẍ LATIN CAPITAL LETTER X WITH DIAERESIS
        ('\u{1E8D}', "x"), // ẍ LATIN SMALL LETTER X WITH DIAERESIS
        ('\u{1E8E}', "Y"), // Ẏ LATIN CAPITAL LETTER Y WITH DOT ABOVE
        ('\u{1E8F}', "y"), // ẏ LATIN SMALL LETTER Y WITH DOT ABOVE
        ('\u{1E90}', "Z"), // Ẑ LATIN CAPITAL LETTER Z WITH CIRCUMFLEX
        ('\u{1E91}', "z"), // ẑ LATIN SMALL LETTER Z WITH CIRCUMFLEX
        ('\u{1E92}', "Z"), // Ẓ LATIN CAPITAL LETTER Z WITH DOT BELOW
        ('\u{1E93}', "z"), // ẓ LATIN SMALL LETTER Z WITH DOT BELOW
        ('\u{1E94}', "Z"), // Ẕ LATIN CAPITAL LETTER Z WITH LINE BELOW
        ('\u{1E95}', "z"), // ẕ LATIN SMALL LETTER Z WITH LINE BELOW
        ('\u{1E96}', "h"), // ẖ LATIN SMALL LETTER H WITH LINE BELOW
        ('\u{1E97}', "t"), // ẗ LATIN SMALL LETTER T WITH DIAERESIS
        ('\u{1E98}', "w"), // ẘ LATIN SMALL LETTER W WITH RING ABOVE
        ('\u{1E99}', "y"), // ẙ LATIN SMALL LETTER Y WITH RING ABOVE
        ('\u{1E9A}', "a"), // ẚ LATIN SMALL LETTER A WITH RIGHT HALF RING
        ('\u{1E9B}', "s"), // ẛ LATIN SMALL LETTER LONG S WITH DOT ABOVE
        ('\u{1E9C}', "s"), // ẜ LATIN SMALL LETTER LONG S WITH DIAGONAL STROKE
        ('\u{1E9D}', "s"), // ẝ LATIN SMALL LETTER LONG S WITH HIGH STROKE
        ('\u{1E9E}', "SS"), // ẞ LATIN CAPITAL LETTER SHARP S
        ('\u{1EA0}', "A"), // Ạ LATIN CAPITAL LETTER A WITH DOT BELOW
        ('\u{1EA1}', "a"), // ạ LATIN SMALL LETTER A WITH DOT BELOW
        ('\u{1EA2}', "A"), // Ả LATIN CAPITAL LETTER A WITH HOOK ABOVE
        ('\u{1EA3}', "a"), // ả LATIN SMALL LETTER A WITH HOOK ABOVE
        ('\u{1EA4}', "A"), // Ấ LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND ACUTE
        ('\u{1EA5}', "a"), // ấ LATIN SMALL LETTER A WITH CIRCUMFLEX AND ACUTE
        ('\u{1EA6}', "A"), // Ầ LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE
        ('\u{1EA7}', "a"), // ầ LATIN SMALL LETTER A WITH CIRCUMFLEX AND GRAVE
        ('\u{1EA8}', "A"), // Ẩ LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1EA9}', "a"), // ẩ LATIN SMALL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1EAA}', "A"), // Ẫ LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND TILDE
        ('\u{1EAB}', "a"), // ẫ LATIN SMALL LETTER A WITH CIRCUMFLEX AND TILDE
        ('\u{1EAC}', "A"), // Ậ LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1EAD}', "a"), // ậ LATIN SMALL LETTER A WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1EAE}', "A"), // Ắ LATIN CAPITAL LETTER A WITH BREVE AND ACUTE
        ('\u{1EAF}', "a"), // ắ LATIN SMALL LETTER A WITH BREVE AND ACUTE
        ('\u{1EB0}', "A"), // Ằ LATIN CAPITAL LETTER A WITH BREVE AND GRAVE
        ('\u{1EB1}', "a"), // ằ LATIN SMALL LETTER A WITH BREVE AND GRAVE
        ('\u{1EB2}', "A"), // Ẳ LATIN CAPITAL LETTER A WITH BREVE AND HOOK ABOVE
        ('\u{1EB3}', "a"), // ẳ LATIN SMALL LETTER A WITH BREVE AND HOOK ABOVE
        ('\u{1EB4}', "A"), // Ẵ LATIN CAPITAL LETTER A WITH BREVE AND TILDE
        ('\u{1EB5}', "a"), // ẵ LATIN SMALL LETTER A WITH BREVE AND TILDE
        ('\u{1EB6}', "A"), // Ặ LATIN CAPITAL LETTER A WITH BREVE AND DOT BELOW
        ('\u{1EB7}', "a"), // ặ LATIN SMALL LETTER A WITH BREVE AND DOT BELOW
        ('\u{1EB8}', "E"), // Ẹ LATIN CAPITAL LETTER E WITH DOT BELOW
        ('\u{1EB9}', "e"), // ẹ LATIN SMALL LETTER E WITH DOT BELOW
        ('\u{1EBA}', "E"), // Ẻ LATIN CAPITAL LETTER E WITH HOOK ABOVE
        ('\u{1EBB}', "e"), // ẻ LATIN SMALL LETTER E WITH HOOK ABOVE
        ('\u{1EBC}', "E"), // Ẽ LATIN CAPITAL LETTER E WITH TILDE
        ('\u{1EBD}', "e"), // ẽ LATIN SMALL LETTER E WITH TILDE
        ('\u{1EBE}', "E"), // Ế LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND ACUTE
        ('\u{1EBF}', "e"), // ế LATIN SMALL LETTER E WITH CIRCUMFLEX AND ACUTE
        ('\u{1EC0}', "E"), // Ề LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND GRAVE
        ('\u{1EC1}', "e"), // ề LATIN SMALL LETTER E WITH CIRCUMFLEX AND GRAVE
        ('\u{1EC2}', "E"), // Ể LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1EC3}', "e"), // ể LATIN SMALL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1EC4}', "E"), // Ễ LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND TILDE
        ('\u{1EC5}', "e"), // ễ LATIN SMALL LETTER E WITH CIRCUMFLEX AND TILDE
        ('\u{1EC6}', "E"), // Ệ LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1EC7}', "e"), // ệ LATIN SMALL LETTER E WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1EC8}', "I"), // Ỉ LATIN CAPITAL LETTER I WITH HOOK ABOVE
        ('\u{1EC9}', "i"), // ỉ LATIN SMALL LETTER I WITH HOOK ABOVE
        ('\u{1ECA}', "I"), // Ị LATIN CAPITAL LETTER I WITH DOT BELOW
        ('\u{1ECB}', "i"), // ị LATIN SMALL LETTER I WITH DOT BELOW
        ('\u{1ECC}', "O"), // Ọ LATIN CAPITAL LETTER O WITH DOT BELOW
        ('\u{1ECD}', "o"), // ọ LATIN SMALL LETTER O WITH DOT BELOW
        ('\u{1ECE}', "O"), // Ỏ LATIN CAPITAL LETTER O WITH HOOK ABOVE
        ('\u{1ECF}', "o"), // ỏ LATIN SMALL LETTER O WITH HOOK ABOVE
        ('\u{1ED0}', "O"), // Ố LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND ACUTE
        ('\u{1ED1}', "o"), // ố LATIN SMALL LETTER O WITH CIRCUMFLEX AND ACUTE
        ('\u{1ED2}', "O"), // Ồ LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND GRAVE
        ('\u{1ED3}', "o"), // ồ LATIN SMALL LETTER O WITH CIRCUMFLEX AND GRAVE
        ('\u{1ED4}', "O"), // Ổ LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1ED5}', "o"), // ổ LATIN SMALL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
        ('\u{1ED6}', "O"), // Ỗ LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND TILDE
        ('\u{1ED7}', "o"), // ỗ LATIN SMALL LETTER O WITH CIRCUMFLEX AND TILDE
        ('\u{1ED8}', "O"), // Ộ LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1ED9}', "o"), // ộ LATIN SMALL LETTER O WITH CIRCUMFLEX AND DOT BELOW
        ('\u{1EDA}', "O"), // Ớ LATIN CAPITAL LETTER O WITH HORN AND ACUTE
        ('\u{1EDB}', "o"), // ớ LATIN SMALL LETTER O WITH HORN AND ACUTE
        ('\u{1EDC}', "O"), // Ờ LATIN CAPITAL LETTER O WITH HORN AND GRAVE
        ('\u{1EDD}', "o"), // ờ LATIN SMALL LETTER O WITH HORN AND GRAVE
        ('\u{1EDE}', "O"), // Ở LATIN CAPITAL LETTER O WITH HORN AND HOOK ABOVE
        ('\u{1EDF}', "o"), // ở LATIN SMALL LETTER O WITH HORN AND HOOK ABOVE
        ('\u{1EE0}', "O"), // Ỡ LATIN CAPITAL LETTER O WITH HORN AND TILDE
        ('\u{1EE1}', "o"), // ỡ LATIN SMALL LETTER O WITH HORN AND TILDE
        ('\u{1EE2}', "O"), // Ợ LATIN CAPITAL LETTER O WITH HORN AND DOT BELOW
        ('\u{1EE3}', "o"), // ợ LATIN SMALL LETTER O WITH HORN AND DOT BELOW
        ('\u{1EE4}', "U"), // Ụ LATIN CAPITAL LETTER U WITH DOT BELOW
        ('\u{1EE5}', "u"), // ụ LATIN SMALL LETTER U WITH DOT BELOW
        ('\u{1EE6}', "U"), // Ủ LATIN CAPITAL LETTER U WITH HOOK ABOVE
        ('\u{1EE7}', "u"), // ủ LATIN SMALL LETTER U WITH HOOK ABOVE
        ('\u{1EE8}', "U"), // Ứ LATIN CAPITAL LETTER U WITH HORN AND ACUTE
        ('\u{1EE9}', "u"), // ứ LATIN SMALL LETTER U WITH HORN AND ACUTE
        ('\u{1EEA}', "U"), // Ừ LATIN CAPITAL LETTER U WITH HORN AND GRAVE
        ('\u{1EEB}', "u"), // ừ LATIN SMALL LETTER U WITH HORN AND GRAVE
        ('\u{1EEC}', "U"), // Ử LATIN CAPITAL LETTER U WITH HORN AND HOOK ABOVE
        ('\u{1EED}', "u"), // ử LATIN SMALL LETTER U WITH HORN AND HOOK ABOVE
        ('\u{1EEE}', "U"), // Ữ LATIN CAPITAL LETTER U WITH HORN AND TILDE
        ('\u{1EEF}', "u"), // ữ LATIN SMALL LETTER U WITH HORN AND TILDE
        ('\u{1EF0}', "U"), // Ự LATIN CAPITAL LETTER U WITH HORN AND DOT BELOW
        ('\u{1EF1}', "u"), // ự LATIN SMALL LETTER U WITH HORN AND DOT BELOW
        ('\u{1EF2}', "Y"), // Ỳ LATIN CAPITAL LETTER Y WITH GRAVE
        ('\u{1EF3}', "y"), // ỳ LATIN SMALL LETTER Y WITH GRAVE
        ('\u{1EF4}', "Y"), // Ỵ LATIN CAPITAL LETTER Y WITH DOT BELOW
        ('\u{1EF5}', "y"), // ỵ LATIN SMALL LETTER Y WITH DOT BELOW
        ('\u{1EF6}', "Y"), // Ỷ LATIN CAPITAL LETTER Y WITH HOOK ABOVE
        ('\u{1EF7}', "y"), // ỷ LATIN SMALL LETTER Y WITH HOOK ABOVE
        ('\u{1EF8}', "Y"), // Ỹ LATIN CAPITAL LETTER Y WITH TILDE
        ('\u{1EF9}', "y"), // ỹ LATIN SMALL LETTER Y WITH TILDE
        ('\u{1EFA}', "Ll"), // Ỻ LATIN CAPITAL LETTER MIDDLE-WELSH LL
        ('\u{1EFB}', "ll"), // ỻ LATIN SMALL LETTER MIDDLE-WELSH LL
        ('\u{1EFC}', "V"), // Ỽ LATIN CAPITAL LETTER MIDDLE-WELSH V
        ('\u{1EFD}', "v"), // ỽ LATIN SMALL LETTER MIDDLE-WELSH V
        ('\u{1EFE}', "Y"), // Ỿ LATIN CAPITAL LETTER Y WITH LOOP
        ('\u{1EFF}', "y"), // ỿ LATIN SMALL LETTER Y WITH LOOP
        ('\u{1F00}', "a"), // ἀ GREEK SMALL LETTER ALPHA WITH PSILI
        ('\u{1F01}', "a"), // ἁ GREEK SMALL LETTER ALPHA WITH DASIA
        ('\u{1F02}', "a"), // ἂ GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA
        ('\u{1F03}', "a"), // ἃ GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA
        ('\u{1F04}', "a"), // ἄ GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA
        ('\u{1F05}', "a"), // ἅ GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA
        ('\u{1F06}', "a"), // ἆ GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI
        ('\u{1F07}', "a"), // ἇ GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI
        ('\u{1F08}', "A"), // Ἀ GREEK CAPITAL LETTER ALPHA WITH PSILI
        ('\u{1F09}', "A"), // Ἁ GREEK CAPITAL LETTER ALPHA WITH DASIA
        ('\u{1F0A}', "A"), // Ἂ GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA
        ('\u{1F0B}', "A"), // Ἃ GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA
        ('\u{1F0C}', "A"), // Ἄ GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA
        ('\u{1F0D}', "A"), // Ἅ GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA
        ('\u{1F0E}', "A"), // Ἆ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI
        ('\u{1F0F}', "A"), // Ἇ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI
        ('\u{1F10}', "e"), // ἐ GREEK SMALL LETTER EPSILON WITH PSILI
        ('\u{1F11}', "e"), // ἑ GREEK SMALL LETTER EPSILON WITH DASIA
        ('\u{1F12}', "e"), // ἒ GREEK SMALL LETTER EPSILON WITH PSILI AND VARIA
        ('\u{1F13}', "e"), // ἓ GREEK SMALL LETTER EPSILON WITH DASIA AND VARIA
        ('\u{1F14}', "e"), // ἔ GREEK SMALL LETTER EPSILON WITH PSILI AND OXIA
        ('\u{1F15}', "e"), // ἕ GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA
        ('\u{1F18}', "E"), // Ἐ GREEK CAPITAL LETTER EPSILON WITH PSILI
        ('\u{1F19}', "E"), // Ἑ GREEK CAPITAL LETTER EPSILON WITH DASIA
        ('\u{1F1A}', "E"), // Ἒ GREEK CAPITAL LETTER EPSILON WITH PSILI AND VARIA
        ('\u{1F1B}', "E"), // Ἓ GREEK CAPITAL LETTER EPSILON WITH DASIA AND VARIA
        ('\u{1F1C}', "E"), // Ἔ GREEK CAPITAL LETTER EPSILON WITH PSILI AND OXIA
        ('\u{1F1D}', "E"), // Ἕ GREEK CAPITAL LETTER EPSILON WITH DASIA AND OXIA
        ('\u{1F20}', "e"), // ἠ GREEK SMALL LETTER ETA WITH PSILI
        ('\u{1F21}', "e"), // ἡ GREEK SMALL LETTER ETA WITH DASIA
        ('\u{1F22}', "e"), // ἢ GREEK SMALL LETTER ETA WITH PSILI AND VARIA
        ('\u{1F23}', "e"), // ἣ GREEK SMALL LETTER ETA WITH DASIA AND VARIA
        ('\u{1F24}', "e"), // ἤ GREEK SMALL LETTER ETA WITH PSILI AND OXIA
        ('\u{1F25}', "e"), // ἥ GREEK SMALL LETTER ETA WITH DASIA AND OXIA
        ('\u{1F26}', "e"), // ἦ GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI
        ('\u{1F27}', "e"), // ἧ GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI
        ('\u{1F28}', "E"), // Ἠ GREEK CAPITAL LETTER ETA WITH PSILI
        ('\u{1F29}', "E"), // Ἡ GREEK CAPITAL LETTER ETA WITH DASIA
        ('\u{1F2A}', "E"), // Ἢ GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA
        ('\u{1F2B}', "E"), // Ἣ GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA
        ('\u{1F2C}', "E"), // Ἤ GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA
        ('\u{1F2D}', "E"), // Ἥ GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA
        ('\u{1F2E}', "E"), // Ἦ GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI
        ('\u{1F2F}', "E"), // Ἧ GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI
        ('\u{1F30}', "i"), // ἰ GREEK SMALL LETTER IOTA WITH PSILI
        ('\u{1F31}', "i"), // ἱ GREEK SMALL LETTER IOTA WITH DASIA
        ('\u{1F32}', "i"), // ἲ GREEK SMALL LETTER IOTA WITH PSILI AND VARIA
        ('\u{1F33}', "i"), // ἳ GREEK SMALL LETTER IOTA WITH DASIA AND VARIA
        ('\u{1F34}', "i"), // ἴ GREEK SMALL LETTER IOTA WITH PSILI AND OXIA
        ('\u{1F35}', "i"), // ἵ GREEK SMALL LETTER IOTA WITH DASIA AND OXIA
        ('\u{1F36}', "i"), // ἶ GREEK SMALL LETTER IOTA WITH PSILI AND PERISPOMENI
        ('\u{1F37}', "i"), // ἷ GREEK SMALL LETTER IOTA WITH DASIA AND PERISPOMENI
        ('\u{1F38}', "I"), // Ἰ GREEK CAPITAL LETTER IOTA WITH PSILI
        ('\u{1F39}', "I"), // Ἱ GREEK CAPITAL LETTER IOTA WITH DASIA
        ('\u{1F3A}', "I"), // Ἲ GREEK CAPITAL LETTER IOTA WITH PSILI AND VARIA
        ('\u{1F3B}', "I"), // Ἳ GREEK CAPITAL LETTER IOTA WITH DASIA AND VARIA
        ('\u{1F3C}', "I"), // Ἴ GREEK CAPITAL LETTER IOTA WITH PSILI AND OXIA
        ('\u{1F3D}', "I"), // Ἵ GREEK CAPITAL LETTER IOTA WITH DASIA AND OXIA
        ('\u{1F3E}', "I"), // Ἶ GREEK CAPITAL LETTER IOTA WITH PSILI AND PERISPOMENI
        ('\u{1F3F}', "I"), // Ἷ GREEK CAPITAL LETTER IOTA WITH DASIA AND PERISPOMENI
        ('\u{1F40}', "o"), // ὀ GREEK SMALL LETTER OMICRON WITH PSILI
        ('\u{1F41}', "o"), // ὁ GREEK SMALL LETTER OMICRON WITH DASIA
        ('\u{1F42}', "o"), // ὂ GREEK SMALL LETTER OMICRON WITH PSILI AND VARIA
        ('\u{1F43}', "o"), // ὃ GREEK SMALL LETTER OMICRON WITH DASIA AND VARIA
        ('\u{1F44}', "o"), // ὄ GREEK SMALL LETTER OMICRON WITH PSILI AND OXIA
        ('\u{1F45}', "o"), // ὅ GREEK SMALL LETTER OMICRON WITH DASIA AND OXIA
        ('\u{1F48}', "O"), // Ὀ GREEK CAPITAL LETTER OMICRON WITH PSILI
        ('\u{1F49}', "O"), // Ὁ GREEK CAPITAL LETTER OMICRON WITH DASIA
        ('\u{1F4A}', "O"), // Ὂ GREEK CAPITAL LETTER OMICRON WITH PSILI AND VARIA
        ('\u{1F4B}', "O"), // Ὃ GREEK CAPITAL LETTER OMICRON WITH DASIA AND VARIA
        ('\u{1F4C}', "O"), // Ὄ GREEK CAPITAL LETTER OMICRON WITH PSILI AND OXIA
        ('\u{1F4D}', "O"), // Ὅ GREEK CAPITAL LETTER OMICRON WITH DASIA AND OXIA
        ('\u{1F50}', "y"), // ὐ GREEK SMALL LETTER UPSILON WITH PSILI
        ('\u{1F51}', "y"), // ὑ GREEK SMALL LETTER UPSILON WITH DASIA
        ('\u{1F52}', "y"), // ὒ GREEK SMALL LETTER UPSILON WITH PSILI AND VARIA
        ('\u{1F53}', "y"), // ὓ GREEK SMALL LETTER UPSILON WITH DASIA AND VARIA
        ('\u{1F54}', "y"), // ὔ GREEK SMALL LETTER UPSILON WITH PSILI AND OXIA
        ('\u{1F55}', "y"), // ὕ GREEK SMALL LETTER UPSILON WITH DASIA AND OXIA
        ('\u{1F56}', "y"), // ὖ GREEK SMALL LETTER UPSILON WITH PSILI AND PERISPOMENI
        ('\u{1F57}', "y"), // ὗ GREEK SMALL LETTER UPSILON WITH DASIA AND PERISPOMENI
        ('\u{1F59}', "Y"), // Ὑ GREEK CAPITAL LETTER UPSILON WITH DASIA
        ('\u{1F5B}', "Y"), // Ὓ GREEK CAPITAL LETTER UPSILON WITH DASIA AND VARIA
        ('\u{1F5D}', "Y"), // Ὕ GREEK CAPITAL LETTER UPSILON WITH DASIA AND OXIA
        ('\u{1F5F}', "Y"), // Ὗ GREEK CAPITAL LETTER UPSILON WITH DASIA AND PERISPOMENI
        ('\u{1F60}', "o"), // ὠ GREEK SMALL LETTER OMEGA WITH PSILI
        ('\u{1F61}', "o"), // ὡ GREEK SMALL LETTER OMEGA WITH DASIA
        ('\u{1F62}', "o"), // ὢ GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA
        ('\u{1F63}', "o"), // ὣ GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA
        ('\u{1F64}', "o"), // ὤ GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA
        ('\u{1F65}', "o"), // ὥ GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA
        ('\u{1F66}', "o"), // ὦ GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI
        ('\u{1F67}', "o"), // ὧ GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI
        ('\u{1F68}', "O"), // Ὠ GREEK CAPITAL LETTER OMEGA WITH PSILI
        ('\u{1F69}', "O"), // Ὡ GREEK CAPITAL LETTER OMEGA WITH DASIA
        ('\u{1F6A}', "O"), // Ὢ GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA
        ('\u{1F6B}', "O"), // Ὣ GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA
        ('\u{1F6C}', "O"), // Ὤ GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA
        ('\u{1F6D}', "O"), // Ὥ GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA
        ('\u{1F6E}', "O"), // Ὦ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI
        ('\u{1F6F}', "O"), // Ὧ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI
        ('\u{1F70}', "a"), // ὰ GREEK SMALL LETTER ALPHA WITH VARIA
        ('\u{1F71}', "a"), // ά GREEK SMALL LETTER ALPHA WITH OXIA
        ('\u{1F72}', "e"), // ὲ GREEK SMALL LETTER EPSILON WITH VARIA
        ('\u{1F73}', "e"), // έ GREEK SMALL LETTER EPSILON WITH OXIA
        ('\u{1F74}', "e"), // ὴ GREEK SMALL LETTER ETA WITH VARIA
        ('\u{1F75}', "e"), // ή GREEK SMALL LETTER ETA WITH OXIA
        ('\u{1F76}', "i"), // ὶ GREEK SMALL LETTER IOTA WITH VARIA
        ('\u{1F77}', "i"), // ί GREEK SMALL LETTER IOTA WITH OXIA
        ('\u{1F78}', "o"), // ὸ GREEK SMALL LETTER OMICRON WITH VARIA
        ('\u{1F79}', "o"), // ό GREEK SMALL LETTER OMICRON WITH OXIA
        ('\u{1F7A}', "y"), // ὺ GREEK SMALL LETTER UPSILON WITH VARIA
        ('\u{1F7B}', "y"), // ύ GREEK SMALL LETTER UPSILON WITH OXIA
        ('\u{1F7C}', "o"), // ὼ GREEK SMALL LETTER OMEGA WITH VARIA
        ('\u{1F7D}', "o"), // ώ GREEK SMALL LETTER OMEGA WITH OXIA
        ('\u{1F80}', "a"), // ᾀ GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1F81}', "a"), // ᾁ GREEK SMALL LETTER ALPHA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1F82}', "a"), // ᾂ GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1F83}', "a"), // ᾃ GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1F84}', "a"), // ᾄ GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1F85}', "a"), // ᾅ GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1F86}', "a"), // ᾆ GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F87}', "a"), // ᾇ GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F88}', "A"), // ᾈ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1F89}', "A"), // ᾉ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1F8A}', "A"), // ᾊ GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1F8B}', "A"), // ᾋ GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1F8C}', "A"), // ᾌ GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1F8D}', "A"), // ᾍ GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1F8E}', "A"), // ᾎ GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F8F}', "A"), // ᾏ GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F90}', "e"), // ᾐ GREEK SMALL LETTER ETA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1F91}', "e"), // ᾑ GREEK SMALL LETTER ETA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1F92}', "e"), // ᾒ GREEK SMALL LETTER ETA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1F93}', "e"), // ᾓ GREEK SMALL LETTER ETA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1F94}', "e"), // ᾔ GREEK SMALL LETTER ETA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1F95}', "e"), // ᾕ GREEK SMALL LETTER ETA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1F96}', "e"), // ᾖ GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F97}', "e"), // ᾗ GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1F98}', "E"), // ᾘ GREEK CAPITAL LETTER ETA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1F99}', "E"), // ᾙ GREEK CAPITAL LETTER ETA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1F9A}', "E"), // ᾚ GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1F9B}', "E"), // ᾛ GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1F9C}', "E"), // ᾜ GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1F9D}', "E"), // ᾝ GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1F9E}', "E"), // ᾞ GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1F9F}', "E"), // ᾟ GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FA0}', "o"), // ᾠ GREEK SMALL LETTER OMEGA WITH PSILI AND YPOGEGRAMMENI
        ('\u{1FA1}', "o"), // ᾡ GREEK SMALL LETTER OMEGA WITH DASIA AND YPOGEGRAMMENI
        ('\u{1FA2}', "o"), // ᾢ GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        ('\u{1FA3}', "o"), // ᾣ GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA AND YPOGEGRAMMENI
        ('\u{1FA4}', "o"), // ᾤ GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA AND YPOGEGRAMMENI
        ('\u{1FA5}', "o"), // ᾥ GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA AND YPOGEGRAMMENI
        ('\u{1FA6}', "o"), // ᾦ GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FA7}', "o"), // ᾧ GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FA8}', "O"), // ᾨ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PROSGEGRAMMENI
        ('\u{1FA9}', "O"), // ᾩ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PROSGEGRAMMENI
        ('\u{1FAA}', "O"), // ᾪ GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA AND PROSGEGRAMMENI
        ('\u{1FAB}', "O"), // ᾫ GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA AND PROSGEGRAMMENI
        ('\u{1FAC}', "O"), // ᾬ GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA AND PROSGEGRAMMENI
        ('\u{1FAD}', "O"), // ᾭ GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA AND PROSGEGRAMMENI
        ('\u{1FAE}', "O"), // ᾮ GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FAF}', "O"), // ᾯ GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI
        ('\u{1FB0}', "a"), // ᾰ GREEK SMALL LETTER ALPHA WITH VRACHY
        ('\u{1FB1}', "a"), // ᾱ GREEK SMALL LETTER ALPHA WITH MACRON
        ('\u{1FB2}', "a"), // ᾲ GREEK SMALL LETTER ALPHA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FB3}', "a"), // ᾳ GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI
        ('\u{1FB4}', "a"), // ᾴ GREEK SMALL LETTER ALPHA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FB6}', "a"), // ᾶ GREEK SMALL LETTER ALPHA WITH PERISPOMENI
        ('\u{1FB7}', "a"), // ᾷ GREEK SMALL LETTER ALPHA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FB8}', "A"), // Ᾰ GREEK CAPITAL LETTER ALPHA WITH VRACHY
        ('\u{1FB9}', "A"), // Ᾱ GREEK CAPITAL LETTER ALPHA WITH MACRON
        ('\u{1FBA}', "A"), // Ὰ GREEK CAPITAL LETTER ALPHA WITH VARIA
        ('\u{1FBB}', "A"), // Ά GREEK CAPITAL LETTER ALPHA WITH OXIA
        ('\u{1FBC}', "A"), // ᾼ GREEK CAPITAL LETTER ALPHA WITH PROSGEGRAMMENI
        ('\u{1FC2}', "e"), // ῂ GREEK SMALL LETTER ETA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FC3}', "e"), // ῃ GREEK SMALL LETTER ETA WITH YPOGEGRAMMENI
        ('\u{1FC4}', "e"), // ῄ GREEK SMALL LETTER ETA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FC6}', "e"), // ῆ GREEK SMALL LETTER ETA WITH PERISPOMENI
        ('\u{1FC7}', "e"), // ῇ GREEK SMALL LETTER ETA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FC8}', "E"), // Ὲ GREEK CAPITAL LETTER EPSILON WITH VARIA
        ('\u{1FC9}', "E"), // Έ GREEK CAPITAL LETTER EPSILON WITH OXIA
        ('\u{1FCA}', "E"), // Ὴ GREEK CAPITAL LETTER ETA WITH VARIA
        ('\u{1FCB}', "E"), // Ή GREEK CAPITAL LETTER ETA WITH OXIA
        ('\u{1FCC}', "E"), // ῌ GREEK CAPITAL LETTER ETA WITH PROSGEGRAMMENI
        ('\u{1FD0}', "i"), // ῐ GREEK SMALL LETTER IOTA WITH VRACHY
        ('\u{1FD1}', "i"), // ῑ GREEK SMALL LETTER IOTA WITH MACRON
        ('\u{1FD2}', "i"), // ῒ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND VARIA
        ('\u{1FD3}', "i"), // ΐ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND OXIA
        ('\u{1FD6}', "i"), // ῖ GREEK SMALL LETTER IOTA WITH PERISPOMENI
        ('\u{1FD7}', "i"), // ῗ GREEK SMALL LETTER IOTA WITH DIALYTIKA AND PERISPOMENI
        ('\u{1FD8}', "I"), // Ῐ GREEK CAPITAL LETTER IOTA WITH VRACHY
        ('\u{1FD9}', "I"), // Ῑ GREEK CAPITAL LETTER IOTA WITH MACRON
        ('\u{1FDA}', "I"), // Ὶ GREEK CAPITAL LETTER IOTA WITH VARIA
        ('\u{1FDB}', "I"), // Ί GREEK CAPITAL LETTER IOTA WITH OXIA
        ('\u{1FE0}', "y"), // ῠ GREEK SMALL LETTER UPSILON WITH VRACHY
        ('\u{1FE1}', "y"), // ῡ GREEK SMALL LETTER UPSILON WITH MACRON
        ('\u{1FE2}', "y"), // ῢ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND VARIA
        ('\u{1FE3}', "y"), // ΰ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND OXIA
        ('\u{1FE4}', "r"), // ῤ GREEK SMALL LETTER RHO WITH PSILI
        ('\u{1FE5}', "r"), // ῥ GREEK SMALL LETTER RHO WITH DASIA
        ('\u{1FE6}', "y"), // ῦ GREEK SMALL LETTER UPSILON WITH PERISPOMENI
        ('\u{1FE7}', "y"), // ῧ GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND PERISPOMENI
        ('\u{1FE8}', "Y"), // Ῠ GREEK CAPITAL LETTER UPSILON WITH VRACHY
        ('\u{1FE9}', "Y"), // Ῡ GREEK CAPITAL LETTER UPSILON WITH MACRON
        ('\u{1FEA}', "Y"), // Ὺ GREEK CAPITAL LETTER UPSILON WITH VARIA
        ('\u{1FEB}', "Y"), // Ύ GREEK CAPITAL LETTER UPSILON WITH OXIA
        ('\u{1FEC}', "R"), // Ῥ GREEK CAPITAL LETTER RHO WITH DASIA
        ('\u{1FF2}', "o"), // ῲ GREEK SMALL LETTER OMEGA WITH VARIA AND YPOGEGRAMMENI
        ('\u{1FF3}', "o"), // ῳ GREEK SMALL LETTER OMEGA WITH YPOGEGRAMMENI
        ('\u{1FF4}', "o"), // ῴ GREEK SMALL LETTER OMEGA WITH OXIA AND YPOGEGRAMMENI
        ('\u{1FF6}', "o"), // ῶ GREEK SMALL LETTER OMEGA WITH PERISPOMENI
        ('\u{1FF7}', "o"), // ῷ GREEK SMALL LETTER OMEGA WITH PERISPOMENI AND YPOGEGRAMMENI
        ('\u{1FF8}', "O"), // Ὸ GREEK CAPITAL LETTER OMICRON WITH VARIA
        ('\u{1FF9}', "O"), // Ό GREEK CAPITAL LETTER OMICRON WITH OXIA
        ('\u{1FFA}', "O"), // Ὼ GREEK CAPITAL LETTER OMEGA WITH VARIA
        ('\u{1FFB}', "O"), // Ώ GREEK CAPITAL LETTER OMEGA WITH OXIA
        ('\u{1FFC}', "O"), // ῼ GREEK CAPITAL LETTER OMEGA WITH PROSGEGRAMMENI
        ('\u{2C60}', "L"), // Ⱡ LATIN CAPITAL LETTER L WITH DOUBLE BAR
        ('\u{2C61}', "l"), // ⱡ LATIN SMALL LETTER L WITH DOUBLE BAR
        ('\u{2C62}', "L"), // Ɫ LATIN CAPITAL LETTER L WITH MIDDLE TILDE
        ('\u{2C63}', "P"), // Ᵽ LATIN CAPITAL LETTER P WITH STROKE
        ('\u{2C64}', "R"), // Ɽ LATIN CAPITAL LETTER R WITH TAIL
        ('\u{2C65}', "a"), // ⱥ LATIN SMALL LETTER A WITH STROKE
        ('\u{2C66}', "t"), // ⱦ LATIN SMALL LETTER T WITH DIAGONAL STROKE
        ('\u{2C67}', "H"), // Ⱨ LATIN CAPITAL LETTER H WITH DESCENDER
        ('\u{2C68}', "h"), // ⱨ LATIN SMALL LETTER H WITH DESCENDER
        ('\u{2C69}', "K"), // Ⱪ LATIN CAPITAL LETTER K WITH DESCENDER
        ('\u{2C6A}', "k"), // ⱪ LATIN SMALL LETTER K WITH DESCENDER
        ('\u{2C6B}', "Z"), // Ⱬ LATIN CAPITAL LETTER Z WITH DESCENDER
        ('\u{2C6C}', "z"), // ⱬ LATIN SMALL LETTER Z WITH DESCENDER
        ('\u{2C6E}', "M"), // Ɱ LATIN CAPITAL LETTER M WITH HOOK
        ('\u{2C6F}', "A"), // Ɐ LATIN CAPITAL LETTER TURNED A
        ('\u{2C71}', "v"), // ⱱ LATIN SMALL LETTER V WITH RIGHT HOOK
        ('\u{2C72}', "W"), // Ⱳ LATIN CAPITAL LETTER W WITH HOOK
        ('\u{2C73}', "w"), // ⱳ LATIN SMALL LETTER W WITH HOOK
        ('\u{2C74}', "v"), // ⱴ LATIN SMALL LETTER V WITH CURL
        ('\u{2C75}', "H"), // Ⱶ LATIN CAPITAL LETTER HALF H
        ('\u{2C76}', "h"), // ⱶ LATIN SMALL LETTER HALF H
        ('\u{2C78}', "e"), // ⱸ LATIN SMALL LETTER E WITH NOTCH
        ('\u{2C79}', "r"), // ⱹ LATIN SMALL LETTER TURNED R WITH TAIL
        ('\u{2C7A}', "o"), // ⱺ LATIN SMALL LETTER O WITH LOW RING INSIDE
        ('\u{2C7B}', "E"), // ⱻ LATIN LETTER SMALL CAPITAL TURNED E
        ('\u{2C7C}', "j"), // ⱼ LATIN SUBSCRIPT SMALL LETTER J
        ('\u{2C7E}', "S"), // Ȿ LATIN CAPITAL LETTER S WITH SWASH TAIL
        ('\u{2C7F}', "Z"), // Ɀ LATIN CAPITAL LETTER Z WITH SWASH TAIL
        ('\u{A728}', "Tz"), // Ꜩ LATIN CAPITAL LETTER TZ
        ('\u{A729}', "tz"), // ꜩ LATIN SMALL LETTER TZ
        ('\u{A730}', "F"), // ꜰ LATIN LETTER SMALL CAPITAL F
        ('\u{A731}', "S"), // ꜱ LATIN LETTER SMALL CAPITAL S
        ('\u{A732}', "Aa"), // Ꜳ LATIN CAPITAL LETTER AA
        ('\u{A733}', "aa"), // ꜳ LATIN SMALL LETTER AA
        ('\u{A734}', "Ao"), // Ꜵ LATIN CAPITAL LETTER AO
        ('\u{A735}', "ao"), // ꜵ LATIN SMALL LETTER AO
        ('\u{A736}', "Au"), // Ꜷ LATIN CAPITAL LETTER AU
        ('\u{A737}', "au"), // ꜷ LATIN SMALL LETTER AU
        ('\u{A738}', "Av"), // Ꜹ LATIN CAPITAL LETTER AV
        ('\u{A739}', "av"), // ꜹ LATIN SMALL LETTER AV
        ('\u{A73A}', "Av"), // Ꜻ LATIN CAPITAL LETTER AV WITH HORIZONTAL BAR
        ('\u{A73B}', "av"), // ꜻ LATIN SMALL LETTER AV WITH HORIZONTAL BAR
        ('\u{A73E}', "C"), // Ꜿ LATIN CAPITAL LETTER REVERSED C WITH DOT
        ('\u{A73F}', "c"), // ꜿ LATIN SMALL LETTER REVERSED C WITH DOT
        ('\u{A740}', "K"), // Ꝁ LATIN CAPITAL LETTER K WITH STROKE
        ('\u{A741}', "k"), // ꝁ LATIN SMALL LETTER K WITH STROKE
        ('\u{A742}', "K"), // Ꝃ LATIN CAPITAL LETTER K WITH DIAGONAL STROKE
        ('\u{A743}', "k"), // ꝃ LATIN SMALL LETTER K WITH DIAGONAL STROKE
        ('\u{A744}', "K"), // Ꝅ LATIN CAPITAL LETTER K WITH STROKE AND DIAGONAL STROKE
        ('\u{A745}', "k"), // ꝅ LATIN SMALL LETTER K WITH STROKE AND DIAGONAL STROKE
        ('\u{A746}', "L"), // Ꝇ LATIN CAPITAL LETTER BROKEN L
        ('\u{A747}', "l"), // ꝇ LATIN SMALL LETTER BROKEN L
        ('\u{A748}', "L"), // Ꝉ LATIN CAPITAL LETTER L WITH HIGH STROKE
        ('\u{A749}', "l"), // ꝉ LATIN SMALL LETTER L WITH HIGH STROKE
        ('\u{A74A}', "O"), // Ꝋ LATIN CAPITAL LETTER O WITH LONG STROKE OVERLAY
        ('\u{A74B}', "o"), // ꝋ LATIN SMALL LETTER O WITH LONG STROKE OVERLAY
        ('\u{A74C}', "O"), // Ꝍ LATIN CAPITAL LETTER O WITH LOOP
        ('\u{A74D}', "o"), // ꝍ LATIN SMALL LETTER O WITH LOOP
        ('\u{A74E}', "Oo"), // Ꝏ LATIN CAPITAL LETTER OO
        ('\u{A74F}', "oo"), // ꝏ LATIN SMALL LETTER OO
        ('\u{A750}', "P"), // Ꝑ LATIN CAPITAL LETTER P WITH STROKE THROUGH DESCENDER
        ('\u{A751}', "p"), // ꝑ LATIN SMALL LETTER P WITH STROKE THROUGH DESCENDER
        ('\u{A752}', "P"), // Ꝓ LATIN CAPITAL LETTER P WITH FLOURISH
        ('\u{A753}', "p"), // ꝓ LATIN SMALL LETTER P WITH FLOURISH
        ('\u{A754}', "P"), // Ꝕ LATIN CAPITAL LETTER P WITH SQUIRREL TAIL
        ('\u{A755}', "p"), // ꝕ LATIN SMALL LETTER P WITH SQUIRREL TAIL
        ('\u{A756}', "Q"), // Ꝗ LATIN CAPITAL LETTER Q WITH STROKE THROUGH DESCENDER
        ('\u{A757}', "q"), // ꝗ LATIN SMALL LETTER Q WITH STROKE THROUGH DESCENDER
        ('\u{A758}', "Q"), // Ꝙ LATIN CAPITAL LETTER Q WITH DIAGONAL STROKE
        ('\u{A759}', "q"), // ꝙ LATIN SMALL LETTER Q WITH DIAGONAL STROKE
        ('\u{A75A}', "R"), // Ꝛ LATIN CAPITAL LETTER R ROTUNDA
        ('\u{A75B}', "r"), // ꝛ LATIN SMALL LETTER R ROTUNDA
        ('\u{A75E}', "V"), // Ꝟ LATIN CAPITAL LETTER V WITH DIAGONAL STROKE
        ('\u{A75F}', "v"), // ꝟ LATIN SMALL LETTER V WITH DIAGONAL STROKE
        ('\u{A760}', "Vy"), // Ꝡ LATIN CAPITAL LETTER VY
        ('\u{A761}', "vy"), // ꝡ LATIN SMALL LETTER VY
        ('\u{A762}', "Z"), // Ꝣ LATIN CAPITAL LETTER VISIGOTHIC Z
        ('\u{A763}', "z"), // ꝣ LATIN SMALL LETTER VISIGOTHIC Z
        ('\u{A779}', "D"), // Ꝺ LATIN CAPITAL LETTER INSULAR D
        ('\u{A77A}', "d"), // ꝺ LATIN SMALL LETTER INSULAR D
        ('\u{A77B}', "F"), // Ꝼ LATIN CAPITAL LETTER INSULAR F
        ('\u{A77C}', "f"), // ꝼ LATIN SMALL LETTER INSULAR F
        ('\u{A77D}', "G"), // Ᵹ LATIN CAPITAL LETTER INSULAR G
        ('\u{A77E}', "G"), // Ꝿ LATIN CAPITAL LETTER TURNED INSULAR G
        ('\u{A77F}', "g"), // ꝿ LATIN SMALL LETTER TURNED INSULAR G
        ('\u{A780}', "L"), // Ꞁ LATIN CAPITAL LETTER TURNED L
        ('\u{A781}', "l"), // ꞁ LATIN SMALL LETTER TURNED L
        ('\u{A782}', "R"), // Ꞃ LATIN CAPITAL LETTER INSULAR R
        ('\u{A783}', "r"), // ꞃ LATIN SMALL LETTER INSULAR R
        ('\u{A784}', "S"), // Ꞅ LATIN CAPITAL LETTER INSULAR S
        ('\u{A785}', "s"), // ꞅ LATIN SMALL LETTER INSULAR S
        ('\u{A786}', "T"), // Ꞇ LATIN CAPITAL LETTER INSULAR T
        ('\u{A787}', "t"), // ꞇ LATIN SMALL LETTER INSULAR T
        ('\u{A78D}', "H"), // Ɥ LATIN CAPITAL LETTER TURNED H
        ('\u{A78E}', "l"), // ꞎ LATIN SMALL LETTER L WITH RETROFLEX HOOK AND BELT
        ('\u{A790}', "N"), // Ꞑ LATIN CAPITAL LETTER N WITH DESCENDER
        ('\u{A791}', "n"), // ꞑ LATIN SMALL LETTER N WITH DESCENDER
        ('\u{A792}', "C"), // Ꞓ LATIN CAPITAL LETTER C WITH BAR
        ('\u{A793}', "c"), // ꞓ LATIN SMALL LETTER C WITH BAR
        ('\u{A794}', "c"), // ꞔ LATIN SMALL LETTER C WITH PALATAL HOOK
        ('\u{A795}', "h"), // ꞕ LATIN SMALL LETTER H WITH PALATAL HOOK
        ('\u{A796}', "B"), // Ꞗ LATIN CAPITAL LETTER B WITH FLOURISH
        ('\u{A797}', "b"), // ꞗ LATIN SMALL LETTER B WITH FLOURISH
        ('\u{A798}', "F"), // Ꞙ LATIN CAPITAL LETTER F WITH STROKE
        ('\u{A799}', "f"), // ꞙ LATIN SMALL LETTER F WITH STROKE
        ('\u{A79A}', "Ae"), // Ꞛ LATIN CAPITAL LETTER VOLAPUK AE
        ('\u{A79B}', "ae"), // ꞛ LATIN SMALL LETTER VOLAPUK AE
        ('\u{A79C}', "Oe"), // Ꞝ LATIN CAPITAL LETTER VOLAPUK OE
        ('\u{A79D}', "oe"), // ꞝ LATIN SMALL LETTER VOLAPUK OE
        ('\u{A79E}', "Ue"), // Ꞟ LATIN CAPITAL LETTER VOLAPUK UE
        ('\u{A79F}', "ue"), // ꞟ LATIN SMALL LETTER VOLAPUK UE
        ('\u{A7A0}', "G"), // Ꞡ LATIN CAPITAL LETTER G WITH OBLIQUE STROKE
        ('\u{A7A1}', "g"), // ꞡ LATIN SMALL LETTER G WITH OBLIQUE STROKE
        ('\u{A7A2}', "K"), // Ꞣ LATIN CAPITAL LETTER K WITH OBLIQUE STROKE
        ('\u{A7A3}', "k"), // ꞣ LATIN SMALL LETTER K WITH OBLIQUE STROKE
        ('\u{A7A4}', "N"), // Ꞥ LATIN CAPITAL LETTER N WITH OBLIQUE STROKE
        ('\u{A7A5}', "n"), // ꞥ LATIN SMALL LETTER N WITH OBLIQUE STROKE
        ('\u{A7A6}', "R"), // Ꞧ LATIN CAPITAL LETTER R WITH OBLIQUE STROKE
        ('\u{A7A7}', "r"), // ꞧ LATIN SMALL LETTER R WITH OBLIQUE STROKE
        ('\u{A7A8}', "S"), // Ꞩ LATIN CAPITAL LETTER S WITH OBLIQUE STROKE
        ('\u{A7A9}', "s"), // ꞩ LATIN SMALL LETTER S WITH OBLIQUE STROKE
        ('\u{A7AA}', "H"), // Ɦ LATIN CAPITAL LETTER H WITH HOOK
        ('\u{A7AB}', "E"), // Ɜ LATIN CAPITAL LETTER REVERSED OPEN E
        ('\u{A7AC}', "G"), // Ɡ LATIN CAPITAL LETTER SCRIPT G
        ('\u{A7AD}', "L"), // Ɬ LATIN CAPITAL LETTER L WITH BELT
        ('\u{A7AE}', "I"), // Ɪ LATIN CAPITAL LETTER SMALL CAPITAL I
        ('\u{A7AF}', "Q"), // ꞯ LATIN LETTER SMALL CAPITAL Q
        ('\u{A7B0}', "K"), // Ʞ LATIN CAPITAL LETTER TURNED K
        ('\u{A7B1}', "T"), // Ʇ LATIN CAPITAL LETTER TURNED T
        ('\u{A7B2}', "J"), // Ʝ LATIN CAPITAL LETTER J WITH CROSSED-TAIL
        ('\u{A7B8}', "U"), // Ꞹ LATIN CAPITAL LETTER U WITH STROKE
        ('\u{A7B9}', "u"), // ꞹ LATIN SMALL LETTER U WITH STROKE
        ('\u{A7BA}', "A"), // Ꞻ LATIN CAPITAL LETTER GLOTTAL A
        ('\u{A7BB}', "a"), // ꞻ LATIN SMALL LETTER GLOTTAL A
        ('\u{A7BC}', "I"), // Ꞽ LATIN CAPITAL LETTER GLOTTAL I
        ('\u{A7BD}', "i"), // ꞽ LATIN SMALL LETTER GLOTTAL I
        ('\u{A7BE}', "U"), // Ꞿ LATIN CAPITAL LETTER GLOTTAL U
        ('\u{A7BF}', "u"), // ꞿ LATIN SMALL LETTER GLOTTAL U
        ('\u{A7C0}', "O"), // Ꟁ LATIN CAPITAL LETTER OLD POLISH O
        ('\u{A7C1}', "o"), // ꟁ LATIN SMALL LETTER OLD POLISH O
        ('\u{A7C2}', "W"), // Ꟃ LATIN CAPITAL LETTER ANGLICANA W
        ('\u{A7C3}', "w"), // ꟃ LATIN SMALL LETTER ANGLICANA W
        ('\u{A7C4}', "C"), // Ꞔ LATIN CAPITAL LETTER C WITH PALATAL HOOK
        ('\u{A7C5}', "S"), // Ʂ LATIN CAPITAL LETTER S WITH HOOK
        ('\u{A7C6}', "Z"), // Ᶎ LATIN CAPITAL LETTER Z WITH PALATAL HOOK
        ('\u{A7C7}', "D"), // Ꟈ LATIN CAPITAL LETTER D WITH SHORT STROKE OVERLAY
        ('\u{A7C8}', "d"), // ꟈ LATIN SMALL LETTER D WITH SHORT STROKE OVERLAY
        ('\u{A7C9}', "S"), // Ꟊ LATIN CAPITAL LETTER S WITH SHORT STROKE OVERLAY
        ('\u{A7CA}', "s"), // ꟊ LATIN SMALL LETTER S WITH SHORT STROKE OVERLAY
        ('\u{A7D0}', "G"), // Ꟑ LATIN CAPITAL LETTER CLOSED INSULAR G
        ('\u{A7D1}', "g"), // ꟑ LATIN SMALL LETTER CLOSED INSULAR G
        ('\u{A7D6}', "S"), // Ꟗ LATIN CAPITAL LETTER MIDDLE SCOTS S
        ('\u{A7D7}', "s"), // ꟗ LATIN SMALL LETTER MIDDLE SCOTS S
        ('\u{A7D8}', "S"), // Ꟙ LATIN CAPITAL LETTER SIGMOID S
        ('\u{A7D9}', "s"), // ꟙ LATIN SMALL LETTER SIGMOID S
        ('\u{A7F5}', "H"), // Ꟶ LATIN CAPITAL LETTER REVERSED HALF H
        ('\u{A7F6}', "h"), // ꟶ LATIN SMALL LETTER REVERSED HALF H
        ('\u{A7FA}', "M"), // ꟺ LATIN LETTER SMALL CAPITAL TURNED M
    ],
);
