// ABOUTME: English message catalog bundled with the client
// ABOUTME: Mirrors the Spanish catalog key for key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Catalog;

fn weight_variation_exceeded(max_kg: f64, days: u32) -> String {
    if days == 1 {
        format!("Weight cannot change by more than {max_kg} kg in 1 day")
    } else {
        format!("Weight cannot change by more than {max_kg} kg in {days} days")
    }
}

fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

pub(super) static CATALOG: Catalog = Catalog {
    language: "en",
    errors: &[
        ("save_weight", "Could not save the weight"),
        ("save_user", "Could not save the user"),
        (
            "height_out_of_range",
            "Height must be between 0.4 and 2.72 meters",
        ),
        ("weight_out_of_range", "Weight must be between 2 and 650 kg"),
        ("birth_date_out_of_range", "The birth date is not valid"),
        ("invalid_number", "Enter a valid number"),
        ("required_field", "This field is required"),
        (
            "weight_variation_exceeded",
            "Weight changed more than allowed since the last entry",
        ),
        (
            "user_must_be_configured",
            "You must set up your profile first",
        ),
    ],
    texts: &[("no_weight_records", "No weight records")],
    bmi_descriptions: &[
        (
            "underweight",
            "Underweight - Your BMI is below the healthy range. Consider talking to a health professional about your nutrition.",
        ),
        (
            "normal",
            "Normal weight - Your BMI is within the healthy range. Keep a balanced diet and regular physical activity.",
        ),
        (
            "overweight",
            "Overweight - Your BMI indicates overweight. Healthy habits such as a balanced diet and regular exercise are recommended. Ask a health professional for a personalized plan.",
        ),
        (
            "obese_class_i",
            "Obesity Class I - Your BMI indicates grade I obesity. Lifestyle changes under medical supervision are important.",
        ),
        (
            "obese_class_ii",
            "Obesity Class II - Your BMI indicates grade II obesity. Please see a health professional soon to build a treatment plan.",
        ),
        (
            "obese_class_iii",
            "Obesity Class III - Your BMI indicates grade III (morbid) obesity. Specialized medical care is essential.",
        ),
    ],
    weight_variation_exceeded,
    greeting,
};
