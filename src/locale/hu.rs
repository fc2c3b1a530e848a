//! Hungarian messages

pub(super) const CODE: &str = "hu";

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("between", "{{title}} értékének \"{{min}}\" és \"{{max}}\" között kell lennie"),
    ("not_between", "{{title}} értéke nem lehet \"{{min}}\" és \"{{max}}\" között"),
    ("blank", "{{title}} mezőnek üresnek kell lennie"),
    ("not_blank", "{{title}} mező nem lehet üres"),
    ("empty", "{{title}} mezőnek üresnek kell lennie"),
    ("not_empty", "{{title}} mező nem lehet üres"),
    ("equal_to", "{{title}} értékének \"{{value}}\" értékkel kell egyeznie"),
    ("not_equal_to", "{{title}} értéke nem egyezhet \"{{value}}\" értékkel"),
    ("false", "{{title}} értékének hamisnak kell lennie"),
    ("not_false", "{{title}} értéke nem lehet hamis"),
    ("greater_or_equal_to", "{{title}} értékének nagyobbnak vagy egyenlőnek kell lennie, mint \"{{value}}\""),
    ("not_greater_or_equal_to", "{{title}} értéke nem lehet nagyobb vagy egyenlő, mint \"{{value}}\""),
    ("greater_than", "{{title}} értékének nagyobbnak kell lennie, mint \"{{value}}\""),
    ("not_greater_than", "{{title}} értéke nem lehet nagyobb, mint \"{{value}}\""),
    ("in_slice", "{{title}} értéke érvénytelen"),
    ("not_in_slice", "{{title}} értéke érvénytelen"),
    ("length", "{{title}} hosszának pontosan \"{{length}}\" karakternek kell lennie"),
    ("not_length", "{{title}} hossza nem lehet pontosan \"{{length}}\" karakter"),
    ("length_between", "{{title}} hosszának \"{{min}}\" és \"{{max}}\" karakter között kell lennie"),
    ("not_length_between", "{{title}} hossza nem lehet \"{{min}}\" és \"{{max}}\" karakter között"),
    ("less_or_equal_to", "{{title}} értékének kisebbnek vagy egyenlőnek kell lennie, mint \"{{value}}\""),
    ("not_less_or_equal_to", "{{title}} értéke nem lehet kisebb vagy egyenlő, mint \"{{value}}\""),
    ("less_than", "{{title}} értékének kisebbnek kell lennie, mint \"{{value}}\""),
    ("not_less_than", "{{title}} értéke nem lehet kisebb, mint \"{{value}}\""),
    ("matching_to", "{{title}} értékének illeszkednie kell a \"{{regexp}}\" mintára"),
    ("not_matching_to", "{{title}} értéke nem illeszkedhet a \"{{regexp}}\" mintára"),
    ("max_length", "{{title}} nem lehet hosszabb \"{{length}}\" karakternél"),
    ("not_max_length", "{{title}} hosszabb kell legyen \"{{length}}\" karakternél"),
    ("min_length", "{{title}} nem lehet rövidebb \"{{length}}\" karakternél"),
    ("not_min_length", "{{title}} rövidebb kell legyen \"{{length}}\" karakternél"),
    ("nil", "{{title}} értékének üresnek (nil) kell lennie"),
    ("not_nil", "{{title}} értéke nem lehet üres (nil)"),
    ("passing", "{{title}} értéke érvénytelen"),
    ("not_passing", "{{title}} értéke érvénytelen"),
    ("true", "{{title}} értékének igaznak kell lennie"),
    ("not_true", "{{title}} értéke nem lehet igaz"),
    ("zero", "{{title}} értékének nullának kell lennie"),
    ("not_zero", "{{title}} értéke nem lehet nulla"),
];
