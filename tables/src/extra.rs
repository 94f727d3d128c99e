//! Narrow override table for presentation forms (ligatures, fullwidth ASCII,
//! enclosed alphanumerics) and a handful of glyphs the primary tables leave out.

use crate::CodePointMap;

pub static EXTRA: CodePointMap = CodePointMap::new(
    "extra",
    &[
        ('\u{00A0}', " "), // NO-BREAK SPACE
        ('\u{01C4}', "DZ"), // Ǆ LATIN CAPITAL LETTER DZ WITH CARON
        ('\u{01C7}', "LJ"), // Ǉ LATIN CAPITAL LETTER LJ
        ('\u{01CA}', "NJ"), // Ǌ LATIN CAPITAL LETTER NJ
        ('\u{01F1}', "DZ"), // Ǳ LATIN CAPITAL LETTER DZ
        ('\u{1E9E}', "SS"), // ẞ LATIN CAPITAL LETTER SHARP S
        ('\u{2122}', "TM"), // ™ TRADE MARK SIGN
        ('\u{2126}', "Ohm"), // Ω OHM SIGN
        ('\u{2460}', "(1)"), // ① CIRCLED DIGIT ONE
        ('\u{2461}', "(2)"), // ② CIRCLED DIGIT TWO
        ('\u{2462}', "(3)"), // ③ CIRCLED DIGIT THREE
        ('\u{2463}', "(4)"), // ④ CIRCLED DIGIT FOUR
        ('\u{2464}', "(5)"), // ⑤ CIRCLED DIGIT FIVE
        ('\u{2465}', "(6)"), // ⑥ CIRCLED DIGIT SIX
        ('\u{2466}', "(7)"), // ⑦ CIRCLED DIGIT SEVEN
        ('\u{2467}', "(8)"), // ⑧ CIRCLED DIGIT EIGHT
        ('\u{2468}', "(9)"), // ⑨ CIRCLED DIGIT NINE
        ('\u{2469}', "(10)"), // ⑩ CIRCLED NUMBER TEN
        ('\u{246A}', "(11)"), // ⑪ CIRCLED NUMBER ELEVEN
        ('\u{246B}', "(12)"), // ⑫ CIRCLED NUMBER TWELVE
        ('\u{246C}', "(13)"), // ⑬ CIRCLED NUMBER THIRTEEN
        ('\u{246D}', "(14)"), // ⑭ CIRCLED NUMBER FOURTEEN
        ('\u{246E}', "(15)"), // ⑮ CIRCLED NUMBER FIFTEEN
        ('\u{246F}', "(16)"), // ⑯ CIRCLED NUMBER SIXTEEN
        ('\u{2470}', "(17)"), // ⑰ CIRCLED NUMBER SEVENTEEN
        ('\u{2471}', "(18)"), // ⑱ CIRCLED NUMBER EIGHTEEN
        ('\u{2472}', "(19)"), // ⑲ CIRCLED NUMBER NINETEEN
        ('\u{2473}', "(20)"), // ⑳ CIRCLED NUMBER TWENTY
        ('\u{2474}', "(1)"), // ⑴ PARENTHESIZED DIGIT ONE
        ('\u{2475}', "(2)"), // ⑵ PARENTHESIZED DIGIT TWO
        ('\u{2476}', "(3)"), // ⑶ PARENTHESIZED DIGIT THREE
        ('\u{2477}', "(4)"), // ⑷ PARENTHESIZED DIGIT FOUR
        ('\u{2478}', "(5)"), // ⑸ PARENTHESIZED DIGIT FIVE
        ('\u{2479}', "(6)"), // ⑹ PARENTHESIZED DIGIT SIX
        ('\u{247A}', "(7)"), // ⑺ PARENTHESIZED DIGIT SEVEN
        ('\u{247B}', "(8)"), // ⑻ PARENTHESIZED DIGIT EIGHT
        ('\u{247C}', "(9)"), // ⑼ PARENTHESIZED DIGIT NINE
        ('\u{247D}', "(10)"), // ⑽ PARENTHESIZED NUMBER TEN
        ('\u{247E}', "(11)"), // ⑾ PARENTHESIZED NUMBER ELEVEN
        ('\u{247F}', "(12)"), // ⑿ PARENTHESIZED NUMBER TWELVE
        ('\u{2480}', "(13)"), // ⒀ PARENTHESIZED NUMBER THIRTEEN
        ('\u{2481}', "(14)"), // ⒁ PARENTHESIZED NUMBER FOURTEEN
        ('\u{2482}', "(15)"), // ⒂ PARENTHESIZED NUMBER FIFTEEN
        ('\u{2483}', "(16)"), // ⒃ PARENTHESIZED NUMBER SIXTEEN
        ('\u{2484}', "(17)"), // ⒄ PARENTHESIZED NUMBER SEVENTEEN
        ('\u{2485}', "(18)"), // ⒅ PARENTHESIZED NUMBER EIGHTEEN
        ('\u{2486}', "(19)"), // ⒆ PARENTHESIZED NUMBER NINETEEN
        ('\u{2487}', "(20)"), // ⒇ PARENTHESIZED NUMBER TWENTY
        ('\u{2488}', "1."), // ⒈ DIGIT ONE FULL STOP
        ('\u{2489}', "2."), // ⒉ DIGIT TWO FULL STOP
        ('\u{248A}', "3."), // ⒊ DIGIT THREE FULL STOP
        ('\u{248B}', "4."), // ⒋ DIGIT FOUR FULL STOP
        ('\u{248C}', "5."), // ⒌ DIGIT FIVE FULL STOP
        ('\u{248D}', "6."), // ⒍ DIGIT SIX FULL STOP
        ('\u{248E}', "7."), // ⒎ DIGIT SEVEN FULL STOP
        ('\u{248F}', "8."), // ⒏ DIGIT EIGHT FULL STOP
        ('\u{2490}', "9."), // ⒐ DIGIT NINE FULL STOP
        ('\u{2491}', "10."), // ⒑ NUMBER TEN FULL STOP
        ('\u{2492}', "11."), // ⒒ NUMBER ELEVEN FULL STOP
        ('\u{2493}', "12."), // ⒓ NUMBER TWELVE FULL STOP
        ('\u{2494}', "13."), // ⒔ NUMBER THIRTEEN FULL STOP
        ('\u{2495}', "14."), // ⒕ NUMBER FOURTEEN FULL STOP
        ('\u{2496}', "15."), // ⒖ NUMBER FIFTEEN FULL STOP
        ('\u{2497}', "16."), // ⒗ NUMBER SIXTEEN FULL STOP
        ('\u{2498}', "17."), // ⒘ NUMBER SEVENTEEN FULL STOP
        ('\u{2499}', "18."), // ⒙ NUMBER EIGHTEEN FULL STOP
        ('\u{249A}', "19."), // ⒚ NUMBER NINETEEN FULL STOP
        ('\u{249B}', "20."), // ⒛ NUMBER TWENTY FULL STOP
        ('\u{249C}', "a"), // ⒜ PARENTHESIZED LATIN SMALL LETTER A
        ('\u{249D}', "b"), // ⒝ PARENTHESIZED LATIN SMALL LETTER B
        ('\u{249E}', "c"), // ⒞ PARENTHESIZED LATIN SMALL LETTER C
        ('\u{249F}', "d"), // ⒟ PARENTHESIZED LATIN SMALL LETTER D
        ('\u{24A0}', "e"), // ⒠ PARENTHESIZED LATIN SMALL LETTER E
        ('\u{24A1}', "f"), // ⒡ PARENTHESIZED LATIN SMALL LETTER F
        ('\u{24A2}', "g"), // ⒢ PARENTHESIZED LATIN SMALL LETTER G
        ('\u{24A3}', "h"), // ⒣ PARENTHESIZED LATIN SMALL LETTER H
        ('\u{24A4}', "i"), // ⒤ PARENTHESIZED LATIN SMALL LETTER I
        ('\u{24A5}', "j"), // ⒥ PARENTHESIZED LATIN SMALL LETTER J
        ('\u{24A6}', "k"), // ⒦ PARENTHESIZED LATIN SMALL LETTER K
        ('\u{24A7}', "l"), // ⒧ PARENTHESIZED LATIN SMALL LETTER L
        ('\u{24A8}', "m"), // ⒨ PARENTHESIZED LATIN SMALL LETTER M
        ('\u{24A9}', "n"), // ⒩ PARENTHESIZED LATIN SMALL LETTER N
        ('\u{24AA}', "o"), // ⒪ PARENTHESIZED LATIN SMALL LETTER O
        ('\u{24AB}', "p"), // ⒫ PARENTHESIZED LATIN SMALL LETTER P
        ('\u{24AC}', "q"), // ⒬ PARENTHESIZED LATIN SMALL LETTER Q
        ('\u{24AD}', "r"), // ⒭ PARENTHESIZED LATIN SMALL LETTER R
        ('\u{24AE}', "s"), // ⒮ PARENTHESIZED LATIN SMALL LETTER S
        ('\u{24AF}', "t"), // ⒯ PARENTHESIZED LATIN SMALL LETTER T
        ('\u{24B0}', "u"), // ⒰ PARENTHESIZED LATIN SMALL LETTER U
        ('\u{24B1}', "v"), // ⒱ PARENTHESIZED LATIN SMALL LETTER V
        ('\u{24B2}', "w"), // ⒲ PARENTHESIZED LATIN SMALL LETTER W
        ('\u{24B3}', "x"), // ⒳ PARENTHESIZED LATIN SMALL LETTER X
        ('\u{24B4}', "y"), // ⒴ PARENTHESIZED LATIN SMALL LETTER Y
        ('\u{24B5}', "z"), // ⒵ PARENTHESIZED LATIN SMALL LETTER Z
        ('\u{24B6}', "A"), // Ⓐ CIRCLED LATIN CAPITAL LETTER A
        ('\u{24B7}', "B"), // Ⓑ CIRCLED LATIN CAPITAL LETTER B
        ('\u{24B8}', "C"), // Ⓒ CIRCLED LATIN CAPITAL LETTER C
        ('\u{24B9}', "D"), // Ⓓ CIRCLED LATIN CAPITAL LETTER D
        ('\u{24BA}', "E"), // Ⓔ CIRCLED LATIN CAPITAL LETTER E
        ('\u{24BB}', "F"), // Ⓕ CIRCLED LATIN CAPITAL LETTER F
        ('\u{24BC}', "G"), // Ⓖ CIRCLED LATIN CAPITAL LETTER G
        ('\u{24BD}', "H"), // Ⓗ CIRCLED LATIN CAPITAL LETTER H
        ('\u{24BE}', "I"), // Ⓘ CIRCLED LATIN CAPITAL LETTER I
        ('\u{24BF}', "J"), // Ⓙ CIRCLED LATIN CAPITAL LETTER J
        ('\u{24C0}', "K"), // Ⓚ CIRCLED LATIN CAPITAL LETTER K
        ('\u{24C1}', "L"), // Ⓛ CIRCLED LATIN CAPITAL LETTER L
        ('\u{24C2}', "M"), // Ⓜ CIRCLED LATIN CAPITAL LETTER M
        ('\u{24C3}', "N"), // Ⓝ CIRCLED LATIN CAPITAL LETTER N
        ('\u{24C4}', "O"), // Ⓞ CIRCLED LATIN CAPITAL LETTER O
        ('\u{24C5}', "P"), // Ⓟ CIRCLED LATIN CAPITAL LETTER P
        ('\u{24C6}', "Q"), // Ⓠ CIRCLED LATIN CAPITAL LETTER Q
        ('\u{24C7}', "R"), // Ⓡ CIRCLED LATIN CAPITAL LETTER R
        ('\u{24C8}', "S"), // Ⓢ CIRCLED LATIN CAPITAL LETTER S
        ('\u{24C9}', "T"), // Ⓣ CIRCLED LATIN CAPITAL LETTER T
        ('\u{24CA}', "U"), // Ⓤ CIRCLED LATIN CAPITAL LETTER U
        ('\u{24CB}', "V"), // Ⓥ CIRCLED LATIN CAPITAL LETTER V
        ('\u{24CC}', "W"), // Ⓦ CIRCLED LATIN CAPITAL LETTER W
        ('\u{24CD}', "X"), // Ⓧ CIRCLED LATIN CAPITAL LETTER X
        ('\u{24CE}', "Y"), // Ⓨ CIRCLED LATIN CAPITAL LETTER Y
        ('\u{24CF}', "Z"), // Ⓩ CIRCLED LATIN CAPITAL LETTER Z
        ('\u{24D0}', "a"), // ⓐ CIRCLED LATIN SMALL LETTER A
        ('\u{24D1}', "b"), // ⓑ CIRCLED LATIN SMALL LETTER B
        ('\u{24D2}', "c"), // ⓒ CIRCLED LATIN SMALL LETTER C
        ('\u{24D3}', "d"), // ⓓ CIRCLED LATIN SMALL LETTER D
        ('\u{24D4}', "e"), // ⓔ CIRCLED LATIN SMALL LETTER E
        ('\u{24D5}', "f"), // ⓕ CIRCLED LATIN SMALL LETTER F
        ('\u{24D6}', "g"), // ⓖ CIRCLED LATIN SMALL LETTER G
        ('\u{24D7}', "h"), // ⓗ CIRCLED LATIN SMALL LETTER H
        ('\u{24D8}', "i"), // ⓘ CIRCLED LATIN SMALL LETTER I
        ('\u{24D9}', "j"), // ⓙ CIRCLED LATIN SMALL LETTER J
        ('\u{24DA}', "k"), // ⓚ CIRCLED LATIN SMALL LETTER K
        ('\u{24DB}', "l"), // ⓛ CIRCLED LATIN SMALL LETTER L
        ('\u{24DC}', "m"), // ⓜ CIRCLED LATIN SMALL LETTER M
        ('\u{24DD}', "n"), // ⓝ CIRCLED LATIN SMALL LETTER N
        ('\u{24DE}', "o"), // ⓞ CIRCLED LATIN SMALL LETTER O
        ('\u{24DF}', "p"), // ⓟ CIRCLED LATIN SMALL LETTER P
        ('\u{24E0}', "q"), // ⓠ CIRCLED LATIN SMALL LETTER Q
        ('\u{24E1}', "r"), // ⓡ CIRCLED LATIN SMALL LETTER R
        ('\u{24E2}', "s"), // ⓢ CIRCLED LATIN SMALL LETTER S
        ('\u{24E3}', "t"), // ⓣ CIRCLED LATIN SMALL LETTER T
        ('\u{24E4}', "u"), // ⓤ CIRCLED LATIN SMALL LETTER U
        ('\u{24E5}', "v"), // ⓥ CIRCLED LATIN SMALL LETTER V
        ('\u{24E6}', "w"), // ⓦ CIRCLED LATIN SMALL LETTER W
        ('\u{24E7}', "x"), // ⓧ CIRCLED LATIN SMALL LETTER X
        ('\u{24E8}', "y"), // ⓨ CIRCLED LATIN SMALL LETTER Y
        ('\u{24E9}', "z"), // ⓩ CIRCLED LATIN SMALL LETTER Z
        ('\u{2E17}', "-"), // ⸗ DOUBLE OBLIQUE HYPHEN
        ('\u{2E2E}', "?"), // ⸮ REVERSED QUESTION MARK
        ('\u{2E3A}', "---"), // ⸺ TWO-EM DASH
        ('\u{2E3B}', "----"), // ⸻ THREE-EM DASH
        ('\u{2E40}', "="), // ⹀ DOUBLE HYPHEN
        ('\u{2E41}', ","), // ⹁ REVERSED COMMA
        ('\u{FB00}', "ff"), // ﬀ LATIN SMALL LIGATURE FF
        ('\u{FB01}', "fi"), // ﬁ LATIN SMALL LIGATURE FI
        ('\u{FB02}', "fl"), // ﬂ LATIN SMALL LIGATURE FL
        ('\u{FB03}', "ffi"), // ﬃ LATIN SMALL LIGATURE FFI
        ('\u{FB04}', "ffl"), // ﬄ LATIN SMALL LIGATURE FFL
        ('\u{FB05}', "st"), // ﬅ LATIN SMALL LIGATURE LONG S T
        ('\u{FB06}', "st"), // ﬆ LATIN SMALL LIGATURE ST
        ('\u{FF01}', "!"), // ！ FULLWIDTH EXCLAMATION MARK
        ('\u{FF02}', "\""), // ＂ FULLWIDTH QUOTATION MARK
        ('\u{FF03}', "#"), // ＃ FULLWIDTH NUMBER SIGN
        ('\u{FF04}', "$"), // ＄ FULLWIDTH DOLLAR SIGN
        ('\u{FF05}', "%"), // ％ FULLWIDTH PERCENT SIGN
        ('\u{FF06}', "&"), // ＆ FULLWIDTH AMPERSAND
        ('\u{FF07}', "'"), // ＇ FULLWIDTH APOSTROPHE
        ('\u{FF08}', "("), // （ FULLWIDTH LEFT PARENTHESIS
        ('\u{FF09}', ")"), // ） FULLWIDTH RIGHT PARENTHESIS
        ('\u{FF0A}', "*"), // ＊ FULLWIDTH ASTERISK
        ('\u{FF0B}', "+"), // ＋ FULLWIDTH PLUS SIGN
        ('\u{FF0C}', ","), // ， FULLWIDTH COMMA
        ('\u{FF0D}', "-"), // － FULLWIDTH HYPHEN-MINUS
        ('\u{FF0E}', "."), // ． FULLWIDTH FULL STOP
        ('\u{FF0F}', "/"), // ／ FULLWIDTH SOLIDUS
        ('\u{FF10}', "0"), // ０ FULLWIDTH DIGIT ZERO
        ('\u{FF11}', "1"), // １ FULLWIDTH DIGIT ONE
        ('\u{FF12}', "2"), // ２ FULLWIDTH DIGIT TWO
        ('\u{FF13}', "3"), // ３ FULLWIDTH DIGIT THREE
        ('\u{FF14}', "4"), // ４ FULLWIDTH DIGIT FOUR
        ('\u{FF15}', "5"), // ５ FULLWIDTH DIGIT FIVE
        ('\u{FF16}', "6"), // ６ FULLWIDTH DIGIT SIX
        ('\u{FF17}', "7"), // ７ FULLWIDTH DIGIT SEVEN
        ('\u{FF18}', "8"), // ８ FULLWIDTH DIGIT EIGHT
        ('\u{FF19}', "9"), // ９ FULLWIDTH DIGIT NINE
        ('\u{FF1A}', ":"), // ： FULLWIDTH COLON
        ('\u{FF1B}', ";"), // ； FULLWIDTH SEMICOLON
        ('\u{FF1C}', "<"), // ＜ FULLWIDTH LESS-THAN SIGN
        ('\u{FF1D}', "="), // ＝ FULLWIDTH EQUALS SIGN
        ('\u{FF1E}', ">"), // ＞ FULLWIDTH GREATER-THAN SIGN
        ('\u{FF1F}', "?"), // ？ FULLWIDTH QUESTION MARK
        ('\u{FF20}', "@"), // ＠ FULLWIDTH COMMERCIAL AT
        ('\u{FF21}', "A"), // Ａ FULLWIDTH LATIN CAPITAL LETTER A
        ('\u{FF22}', "B"), // Ｂ FULLWIDTH LATIN CAPITAL LETTER B
        ('\u{FF23}', "C"), // Ｃ FULLWIDTH LATIN CAPITAL LETTER C
        ('\u{FF24}', "D"), // Ｄ FULLWIDTH LATIN CAPITAL LETTER D
        ('\u{FF25}', "E"), // Ｅ FULLWIDTH LATIN CAPITAL LETTER E
        ('\u{FF26}', "F"), // Ｆ FULLWIDTH LATIN CAPITAL LETTER F
        ('\u{FF27}', "G"), // Ｇ FULLWIDTH LATIN CAPITAL LETTER G
        ('\u{FF28}', "H"), // Ｈ FULLWIDTH LATIN CAPITAL LETTER H
        ('\u{FF29}', "I"), // Ｉ FULLWIDTH LATIN CAPITAL LETTER I
        ('\u{FF2A}', "J"), // Ｊ FULLWIDTH LATIN CAPITAL LETTER J
        ('\u{FF2B}', "K"), // Ｋ FULLWIDTH LATIN CAPITAL LETTER K
        ('\u{FF2C}', "L"), // Ｌ FULLWIDTH LATIN CAPITAL LETTER L
        ('\u{FF2D}', "M"), // Ｍ FULLWIDTH LATIN CAPITAL LETTER M
        ('\u{FF2E}', "N"), // Ｎ FULLWIDTH LATIN CAPITAL LETTER N
        ('\u{FF2F}', "O"), // Ｏ FULLWIDTH LATIN CAPITAL LETTER O
        ('\u{FF30}', "P"), // Ｐ FULLWIDTH LATIN CAPITAL LETTER P
        ('\u{FF31}', "Q"), // Ｑ FULLWIDTH LATIN CAPITAL LETTER Q
        ('\u{FF32}', "R"), // Ｒ FULLWIDTH LATIN CAPITAL LETTER R
        ('\u{FF33}', "S"), // Ｓ FULLWIDTH LATIN CAPITAL LETTER S
        ('\u{FF34}', "T"), // Ｔ FULLWIDTH LATIN CAPITAL LETTER T
        ('\u{FF35}', "U"), // Ｕ FULLWIDTH LATIN CAPITAL LETTER U
        ('\u{FF36}', "V"), // Ｖ FULLWIDTH LATIN CAPITAL LETTER V
        ('\u{FF37}', "W"), // Ｗ FULLWIDTH LATIN CAPITAL LETTER W
        ('\u{FF38}', "X"), // Ｘ FULLWIDTH LATIN CAPITAL LETTER X
        ('\u{FF39}', "Y"), // Ｙ FULLWIDTH LATIN CAPITAL LETTER Y
        ('\u{FF3A}', "Z"), // Ｚ FULLWIDTH LATIN CAPITAL LETTER Z
        ('\u{FF3B}', "["), // ［ FULLWIDTH LEFT SQUARE BRACKET
        ('\u{FF3C}', "\\"), // ＼ FULLWIDTH REVERSE SOLIDUS
        ('\u{FF3D}', "]"), // ］ FULLWIDTH RIGHT SQUARE BRACKET
        ('\u{FF3E}', "^"), // ＾ FULLWIDTH CIRCUMFLEX ACCENT
        ('\u{FF3F}', "_"), // ＿ FULLWIDTH LOW LINE
        ('\u{FF40}', "`"), // ｀ FULLWIDTH GRAVE ACCENT
        ('\u{FF41}', "a"), // ａ FULLWIDTH LATIN SMALL LETTER A
        ('\u{FF42}', "b"), // ｂ FULLWIDTH LATIN SMALL LETTER B
        ('\u{FF43}', "c"), // ｃ FULLWIDTH LATIN SMALL LETTER C
        ('\u{FF44}', "d"), // ｄ FULLWIDTH LATIN SMALL LETTER D
        ('\u{FF45}', "e"), // ｅ FULLWIDTH LATIN SMALL LETTER E
        ('\u{FF46}', "f"), // ｆ FULLWIDTH LATIN SMALL LETTER F
        ('\u{FF47}', "g"), // ｇ FULLWIDTH LATIN SMALL LETTER G
        ('\u{FF48}', "h"), // ｈ FULLWIDTH LATIN SMALL LETTER H
        ('\u{FF49}', "i"), // ｉ FULLWIDTH LATIN SMALL LETTER I
        ('\u{FF4A}', "j"), // ｊ FULLWIDTH LATIN SMALL LETTER J
        ('\u{FF4B}', "k"), // ｋ FULLWIDTH LATIN SMALL LETTER K
        ('\u{FF4C}', "l"), // ｌ FULLWIDTH LATIN SMALL LETTER L
        ('\u{FF4D}', "m"), // ｍ FULLWIDTH LATIN SMALL LETTER M
        ('\u{FF4E}', "n"), // ｎ FULLWIDTH LATIN SMALL LETTER N
        ('\u{FF4F}', "o"), // ｏ FULLWIDTH LATIN SMALL LETTER O
        ('\u{FF50}', "p"), // ｐ FULLWIDTH LATIN SMALL LETTER P
        ('\u{FF51}', "q"), // ｑ FULLWIDTH LATIN SMALL LETTER Q
        ('\u{FF52}', "r"), // ｒ FULLWIDTH LATIN SMALL LETTER R
        ('\u{FF53}', "s"), // ｓ FULLWIDTH LATIN SMALL LETTER S
        ('\u{FF54}', "t"), // ｔ FULLWIDTH LATIN SMALL LETTER T
        ('\u{FF55}', "u"), // ｕ FULLWIDTH LATIN SMALL LETTER U
        ('\u{FF56}', "v"), // ｖ FULLWIDTH LATIN SMALL LETTER V
        ('\u{FF57}', "w"), // ｗ FULLWIDTH LATIN SMALL LETTER W
        ('\u{FF58}', "x"), // ｘ FULLWIDTH LATIN SMALL LETTER X
        ('\u{FF59}', "y"), // ｙ FULLWIDTH LATIN SMALL LETTER Y
        ('\u{FF5A}', "z"), // ｚ FULLWIDTH LATIN SMALL LETTER Z
        ('\u{FF5B}', "{"), // ｛ FULLWIDTH LEFT CURLY BRACKET
        ('\u{FF5C}', "|"), // ｜ FULLWIDTH VERTICAL LINE
        ('\u{FF5D}', "}"), // ｝ FULLWIDTH RIGHT CURLY BRACKET
        ('\u{FF5E}', "~"), // ～ FULLWIDTH TILDE
    ],
);
