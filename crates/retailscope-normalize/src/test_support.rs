/// Cells that exercise separators, JSON edge cases, non-ASCII digits and
/// letters whose case mapping changes byte length.
pub(crate) const ODD_INPUTS: &[&str] = &[
    "",
    " ",
    "\t\n",
    "\0",
    "-",
    "/",
    "//",
    ",",
    "+",
    " & ",
    " und ",
    " mit ",
    " and ",
    "schwarz//weiß",
    "black and ",
    "{}",
    "[]",
    "{\"url\": 5}",
    "{\"url\": \"\"}",
    "{\"name\": \"\"}",
    "{\"name\": null, \"title\": 3}",
    "{broken",
    "null",
    "\"\"",
    "https://",
    "https:///",
    "/index.html",
    "?#",
    "３８",
    "१",
    "٤٢B",
    "İSTANBUL",
    "ß",
    "ÜBERGRÖSSE BH",
    "\u{1F600}",
    "日本語",
    "e\u{0301}",
    "99999999999999999999999 Pack",
    "３ Pack",
    "-1 Pack",
    "0x",
];
