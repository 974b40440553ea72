use crate::domain::model::Booking;

/// Build a `wa.me` deep link opening a chat with `number`, pre-filled with
/// a summary of the booking. Pure: same booking and number always produce
/// the same link. Non-digits in `number` are stripped so configured values
/// like "+91 98120-45670" still form a valid link.
pub fn whatsapp_link(number: &str, booking: &Booking) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(&inquiry_message(booking))
    )
}

fn inquiry_message(booking: &Booking) -> String {
    let mut message = format!(
        "Hi, I'm {}. I'd like to book a consultation at Veyra Skin Clinic.",
        booking.name
    );
    if let Some(concerns) = &booking.concerns {
        message.push_str("\nConcerns: ");
        message.push_str(concerns);
    }
    message.push_str(&format!(
        "\nContact: {} {}",
        booking.country_code, booking.phone
    ));
    message
}
