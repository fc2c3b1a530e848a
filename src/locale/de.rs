//! German messages

pub(super) const CODE: &str = "de";

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("between", "{{title}} muss zwischen \"{{min}}\" und \"{{max}}\" liegen"),
    ("not_between", "{{title}} darf nicht zwischen \"{{min}}\" und \"{{max}}\" liegen"),
    ("blank", "{{title}} muss leer sein"),
    ("not_blank", "{{title}} darf nicht leer sein"),
    ("empty", "{{title}} muss leer sein"),
    ("not_empty", "{{title}} darf nicht leer sein"),
    ("equal_to", "{{title}} muss gleich \"{{value}}\" sein"),
    ("not_equal_to", "{{title}} darf nicht gleich \"{{value}}\" sein"),
    ("false", "{{title}} muss falsch sein"),
    ("not_false", "{{title}} darf nicht falsch sein"),
    ("greater_or_equal_to", "{{title}} muss größer oder gleich \"{{value}}\" sein"),
    ("not_greater_or_equal_to", "{{title}} darf nicht größer oder gleich \"{{value}}\" sein"),
    ("greater_than", "{{title}} muss größer als \"{{value}}\" sein"),
    ("not_greater_than", "{{title}} darf nicht größer als \"{{value}}\" sein"),
    ("in_slice", "{{title}} ist nicht gültig"),
    ("not_in_slice", "{{title}} ist nicht gültig"),
    ("length", "{{title}} muss genau \"{{length}}\" Zeichen lang sein"),
    ("not_length", "{{title}} darf nicht genau \"{{length}}\" Zeichen lang sein"),
    ("length_between", "{{title}} muss zwischen \"{{min}}\" und \"{{max}}\" Zeichen lang sein"),
    ("not_length_between", "{{title}} darf nicht zwischen \"{{min}}\" und \"{{max}}\" Zeichen lang sein"),
    ("less_or_equal_to", "{{title}} muss kleiner oder gleich \"{{value}}\" sein"),
    ("not_less_or_equal_to", "{{title}} darf nicht kleiner oder gleich \"{{value}}\" sein"),
    ("less_than", "{{title}} muss kleiner als \"{{value}}\" sein"),
    ("not_less_than", "{{title}} darf nicht kleiner als \"{{value}}\" sein"),
    ("matching_to", "{{title}} muss \"{{regexp}}\" entsprechen"),
    ("not_matching_to", "{{title}} darf nicht \"{{regexp}}\" entsprechen"),
    ("max_length", "{{title}} darf nicht länger als \"{{length}}\" Zeichen sein"),
    ("not_max_length", "{{title}} muss länger als \"{{length}}\" Zeichen sein"),
    ("min_length", "{{title}} darf nicht kürzer als \"{{length}}\" Zeichen sein"),
    ("not_min_length", "{{title}} muss kürzer als \"{{length}}\" Zeichen sein"),
    ("nil", "{{title}} muss nil sein"),
    ("not_nil", "{{title}} darf nicht nil sein"),
    ("passing", "{{title}} ist nicht gültig"),
    ("not_passing", "{{title}} ist nicht gültig"),
    ("true", "{{title}} muss wahr sein"),
    ("not_true", "{{title}} darf nicht wahr sein"),
    ("zero", "{{title}} muss null sein"),
    ("not_zero", "{{title}} darf nicht null sein"),
];
