//! English messages (default locale)

pub(super) const CODE: &str = "en";

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("between", "{{title}} must be between \"{{min}}\" and \"{{max}}\""),
    ("not_between", "{{title}} can't be a value between \"{{min}}\" and \"{{max}}\""),
    ("blank", "{{title}} must be blank"),
    ("not_blank", "{{title}} can't be blank"),
    ("empty", "{{title}} must be empty"),
    ("not_empty", "{{title}} can't be empty"),
    ("equal_to", "{{title}} must be equal to \"{{value}}\""),
    ("not_equal_to", "{{title}} can't be equal to \"{{value}}\""),
    ("false", "{{title}} must be false"),
    ("not_false", "{{title}} must not be false"),
    ("greater_or_equal_to", "{{title}} must be greater than or equal to \"{{value}}\""),
    ("not_greater_or_equal_to", "{{title}} can't be greater than or equal to \"{{value}}\""),
    ("greater_than", "{{title}} must be greater than \"{{value}}\""),
    ("not_greater_than", "{{title}} can't be greater than \"{{value}}\""),
    ("in_slice", "{{title}} is not valid"),
    ("not_in_slice", "{{title}} is not valid"),
    ("length", "{{title}} must have a length equal to \"{{length}}\""),
    ("not_length", "{{title}} can't have a length equal to \"{{length}}\""),
    ("length_between", "{{title}} must have a length between \"{{min}}\" and \"{{max}}\""),
    ("not_length_between", "{{title}} can't have a length between \"{{min}}\" and \"{{max}}\""),
    ("less_or_equal_to", "{{title}} must be less than or equal to \"{{value}}\""),
    ("not_less_or_equal_to", "{{title}} can't be less than or equal to \"{{value}}\""),
    ("less_than", "{{title}} must be less than \"{{value}}\""),
    ("not_less_than", "{{title}} can't be less than \"{{value}}\""),
    ("matching_to", "{{title}} must match to \"{{regexp}}\""),
    ("not_matching_to", "{{title}} can't match to \"{{regexp}}\""),
    ("max_length", "{{title}} must not have a length longer than \"{{length}}\""),
    ("not_max_length", "{{title}} must have a length longer than \"{{length}}\""),
    ("min_length", "{{title}} must not have a length shorter than \"{{length}}\""),
    ("not_min_length", "{{title}} must have a length shorter than \"{{length}}\""),
    ("nil", "{{title}} must be nil"),
    ("not_nil", "{{title}} must not be nil"),
    ("passing", "{{title}} is not valid"),
    ("not_passing", "{{title}} is not valid"),
    ("true", "{{title}} must be true"),
    ("not_true", "{{title}} must not be true"),
    ("zero", "{{title}} must be zero"),
    ("not_zero", "{{title}} must not be zero"),
];
