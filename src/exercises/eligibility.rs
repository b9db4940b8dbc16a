//! Eligibility and advisory rules.

/// Age range that may book without frequent-flyer status.
pub const FLIGHT_MIN_AGE: u32 = 18;
pub const FLIGHT_MAX_AGE: u32 = 65;

/// Incomes below this are never eligible.
pub const LOAN_MIN_INCOME: u32 = 30_000;
/// Top of the middle income band; above it the premium rules apply.
pub const LOAN_MID_INCOME_MAX: u32 = 60_000;
/// Minimum credit scores for the standard and premium offers.
pub const STANDARD_LOAN_MIN_SCORE: u32 = 701;
pub const PREMIUM_LOAN_MIN_SCORE: u32 = 751;

/// `(min correct, max incorrect)` for each passing tier.
pub const QUIZ_PASS: (u32, u32) = (7, 2);
pub const QUIZ_CONDITIONAL_PASS: (u32, u32) = (5, 3);

/// Weather advisory thresholds. The heat advisory needs both readings
/// strictly above their limits.
pub const HOT_TEMPERATURE: f64 = 30.0;
pub const HUMID: f64 = 70.0;
pub const FREEZING: f64 = 0.0;

crate::label_enum! {
    /// Outcome of [`check_flight_eligibility`].
    pub enum FlightEligibility {
        Eligible => "Eligible to Book",
        NotEligible => "Not Eligible to Book",
    }
}

crate::label_enum! {
    /// Loan offered for an income and credit score.
    pub enum LoanOffer {
        NotEligible => "Not Eligible",
        Secured => "Secured Loan",
        Standard => "Standard Loan",
        Premium => "Premium Loan",
    }
}

crate::label_enum! {
    /// Outcome of [`grade_quiz`].
    pub enum QuizResult {
        Pass => "Pass",
        ConditionalPass => "Conditional Pass",
        Fail => "Fail",
    }
}

crate::label_enum! {
    /// Advisory for a temperature and humidity reading.
    pub enum WeatherAdvisory {
        HeatAndHumidity => "High Temperature and Humidity. Stay Hydrated.",
        Cold => "Low Temperature. Bundle Up!",
        NoAdvisory => "No Specific Advisory",
    }
}

/// Passengers aged 18 to 65 may book; frequent flyers may book at any age.
pub fn check_flight_eligibility(age: u32, frequent_flyer: bool) -> FlightEligibility {
    if frequent_flyer || (FLIGHT_MIN_AGE..=FLIGHT_MAX_AGE).contains(&age) {
        FlightEligibility::Eligible
    } else {
        FlightEligibility::NotEligible
    }
}

/// Loan offer for `income` and `credit_score`.
///
/// Below 30 000 nothing is offered. Up to 60 000 a score above 700 gets a
/// standard loan, otherwise a secured one. Above 60 000 a score above 750
/// gets a premium loan, otherwise a standard one.
pub fn check_loan_eligibility(income: u32, credit_score: u32) -> LoanOffer {
    if income < LOAN_MIN_INCOME {
        LoanOffer::NotEligible
    } else if income <= LOAN_MID_INCOME_MAX {
        if credit_score >= STANDARD_LOAN_MIN_SCORE {
            LoanOffer::Standard
        } else {
            LoanOffer::Secured
        }
    } else if credit_score >= PREMIUM_LOAN_MIN_SCORE {
        LoanOffer::Premium
    } else {
        LoanOffer::Standard
    }
}

/// Each tier needs at least its minimum of correct answers and at most its
/// maximum of incorrect ones.
pub fn grade_quiz(correct: u32, incorrect: u32) -> QuizResult {
    let meets = |(min_correct, max_incorrect): (u32, u32)| {
        correct >= min_correct && incorrect <= max_incorrect
    };
    if meets(QUIZ_PASS) {
        QuizResult::Pass
    } else if meets(QUIZ_CONDITIONAL_PASS) {
        QuizResult::ConditionalPass
    } else {
        QuizResult::Fail
    }
}

/// Advisory for hot and humid weather, or for below-freezing weather.
pub fn get_weather_advisory(temperature: f64, humidity: f64) -> WeatherAdvisory {
    if temperature > HOT_TEMPERATURE && humidity > HUMID {
        WeatherAdvisory::HeatAndHumidity
    } else if temperature < FREEZING {
        WeatherAdvisory::Cold
    } else {
        WeatherAdvisory::NoAdvisory
    }
}
