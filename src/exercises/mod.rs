//! Stateless classification and calculation exercises.
//!
//! Every function here is pure: it maps its inputs to a label or a number
//! by fixed threshold rules. Invalid input yields a sentinel label rather
//! than an error; the one exception is an unknown shipping method, which is
//! reported as [`ShippingError`].

pub mod eligibility;
pub mod numbers;
pub mod pricing;
pub mod shipping;
pub mod validation;

pub use eligibility::{
    check_flight_eligibility, check_loan_eligibility, get_weather_advisory, grade_quiz,
    FlightEligibility, LoanOffer, QuizResult, WeatherAdvisory,
};
pub use numbers::{
    celsius_to_fahrenheit, check_number_status, divide, get_grade, is_even, is_triangle, Grade,
    NumberStatus, Temperature, TriangleCheck,
};
pub use pricing::{
    calculate_order_total, calculate_quantity_discount, calculate_total_discount,
    categorize_product, OrderItem, ProductCategory, QuantityDiscount,
};
pub use shipping::{
    calculate_items_shipping_cost, calculate_shipping_cost, items_shipping_cost, Parcel,
    ShippingError, ShippingMethod,
};
pub use validation::{
    authenticate_user, check_credit_card, check_date, check_email, check_file_size, check_login,
    check_password, validate_credit_card, validate_date, validate_email, validate_login,
    validate_password, validate_url, verify_age, AgeCheck, CardCheck, Checked, DateCheck,
    EmailCheck, FileSizeCheck, LoginResult, Role, UrlCheck, Violation,
};
