//! Entity schemas and row transformers
//!
//! One schema and one transform per entity kind. Transforms are pure: the
//! same well-formed row always decodes to the same record, and a bad cell
//! never fails the row — it resolves to the column default instead.

mod types;

pub use types::*;

use crate::error::Error;
use crate::schema::{Column, RowPolicy, Schema};

pub const TIP_SCHEMA: Schema = Schema {
    sheet: "Tips",
    columns: &[
        Column::id(),
        Column::text("title", ""),
        Column::text("category", "General"),
        Column::text("content", ""),
        Column::image("imageUrl"),
        Column::date("createdAt"),
        Column::text("petType", "All Pets"),
        Column::text("difficulty", "Beginner"),
        Column::text("author", ""),
        Column::text("duration", "5 minutes"),
        Column::text("requirements", ""),
        Column::text("frequency", "As needed"),
        Column::text("priority", "Medium"),
        Column::flag("featured"),
    ],
};

pub const STORY_SCHEMA: Schema = Schema {
    sheet: "Stories",
    columns: &[
        Column::id(),
        Column::text("title", ""),
        Column::text("author", ""),
        Column::text("preview", ""),
        Column::date_checked("date"),
        Column::image("imageUrl"),
        Column::text("category", "General"),
        Column::text("petType", ""),
        Column::text("petName", ""),
        Column::text("petAge", ""),
        Column::text("breed", ""),
        Column::text("source", ""),
        Column::int("likes"),
        Column::flag("featured"),
        Column::text("fullStory", ""),
    ],
};

pub const VET_SCHEMA: Schema = Schema {
    sheet: "Vets",
    columns: &[
        Column::id(),
        Column::text("name", ""),
        Column::text("address", ""),
        Column::text("phone", ""),
        Column::text("email", ""),
        Column::list("services"),
        Column::float("rating"),
        Column::image("imageUrl"),
        Column::text("hours", ""),
        Column::flag("emergency"),
        Column::list("animals"),
        Column::list("languages"),
        Column::text("insurance", ""),
        Column::list("staff"),
        Column::text("specialization", ""),
        Column::text("experience", ""),
    ],
};

pub const PLACE_SCHEMA: Schema = Schema {
    sheet: "Places",
    columns: &[
        Column::id(),
        Column::text("name", ""),
        Column::text("type", ""),
        Column::text("address", ""),
        Column::list("features"),
        Column::float("rating"),
        Column::text("description", ""),
        Column::image("imageUrl"),
        Column::text("hours", ""),
        Column::flag("petFriendly"),
        Column::text("restrictions", ""),
        Column::text("size", ""),
        Column::list("amenities"),
        Column::text("events", ""),
        Column::text("parking", ""),
        Column::text("established", ""),
    ],
};

pub const DONATION_SCHEMA: Schema = Schema {
    sheet: "Donations",
    columns: &[
        Column::id(),
        Column::text("name", ""),
        Column::text("email", ""),
        Column::int("amount"),
        Column::text("tier", ""),
        Column::text("status", ""),
        Column::date("date"),
        Column::text("frequency", "One-time"),
        Column::text("paymentMethod", ""),
        Column::text("fund", "General Fund"),
        Column::flag("recurringDonor"),
        Column::text("notes", ""),
        Column::text("communication", ""),
        Column::text("anonymity", ""),
        Column::text("receipt", ""),
    ],
};

pub const PET_SCHEMA: Schema = Schema {
    sheet: "Pets",
    columns: &[
        Column::id(),
        Column::text("name", ""),
        Column::text("type", ""),
        Column::text("breed", ""),
        Column::int("age"),
        Column::text("description", ""),
        Column::image("image"),
        Column::text("location", ""),
        Column::text("status", "Available"),
    ],
};

/// Decode one raw Tips row
pub fn transform_tip(row: &[String], policy: &RowPolicy) -> Result<Tip, Error> {
    let r = TIP_SCHEMA.decode(row, policy)?;
    Ok(Tip {
        id: r.id(),
        title: r.text("title"),
        category: r.text("category"),
        content: r.text("content"),
        image_url: r.image("imageUrl"),
        created_at: r.date("createdAt"),
        pet_type: r.text("petType"),
        difficulty: r.text("difficulty"),
        author: r.text("author"),
        duration: r.text("duration"),
        requirements: r.text("requirements"),
        frequency: r.text("frequency"),
        priority: r.text("priority"),
        featured: r.flag("featured"),
    })
}

/// Decode one raw Stories row
pub fn transform_story(row: &[String], policy: &RowPolicy) -> Result<Story, Error> {
    let r = STORY_SCHEMA.decode(row, policy)?;
    Ok(Story {
        id: r.id(),
        title: r.text("title"),
        author: r.text("author"),
        preview: r.text("preview"),
        date: r.date_checked("date"),
        image_url: r.image("imageUrl"),
        category: r.text("category"),
        pet_type: r.text("petType"),
        pet_name: r.text("petName"),
        pet_age: r.text("petAge"),
        breed: r.text("breed"),
        source: r.text("source"),
        likes: r.uint("likes"),
        featured: r.flag("featured"),
        full_story: r.text("fullStory"),
    })
}

/// Decode one raw Vets row
pub fn transform_vet(row: &[String], policy: &RowPolicy) -> Result<Vet, Error> {
    let r = VET_SCHEMA.decode(row, policy)?;
    Ok(Vet {
        id: r.id(),
        name: r.text("name"),
        address: r.text("address"),
        phone: r.text("phone"),
        email: r.text("email"),
        services: r.list("services"),
        rating: r.float("rating"),
        image_url: r.image("imageUrl"),
        hours: r.text("hours"),
        emergency: r.flag("emergency"),
        animals: r.list("animals"),
        languages: r.list("languages"),
        insurance: r.text("insurance"),
        staff: r.list("staff"),
        specialization: r.text("specialization"),
        experience: r.text("experience"),
    })
}

/// Decode one raw Places row
pub fn transform_place(row: &[String], policy: &RowPolicy) -> Result<Place, Error> {
    let r = PLACE_SCHEMA.decode(row, policy)?;
    Ok(Place {
        id: r.id(),
        name: r.text("name"),
        kind: r.text("type"),
        address: r.text("address"),
        features: r.list("features"),
        rating: r.float("rating"),
        description: r.text("description"),
        image_url: r.image("imageUrl"),
        hours: r.text("hours"),
        pet_friendly: r.flag("petFriendly"),
        restrictions: r.text("restrictions"),
        size: r.text("size"),
        amenities: r.list("amenities"),
        events: r.text("events"),
        parking: r.text("parking"),
        established: r.text("established"),
    })
}

/// Decode one raw Donations row
pub fn transform_donation(row: &[String], policy: &RowPolicy) -> Result<Donation, Error> {
    let r = DONATION_SCHEMA.decode(row, policy)?;
    Ok(Donation {
        id: r.id(),
        name: r.text("name"),
        email: r.text("email"),
        amount: r.int("amount"),
        tier: r.text("tier"),
        status: r.text("status"),
        date: r.date("date"),
        frequency: r.text("frequency"),
        payment_method: r.text("paymentMethod"),
        fund: r.text("fund"),
        recurring_donor: r.flag("recurringDonor"),
        notes: r.text("notes"),
        communication: r.text("communication"),
        anonymity: r.text("anonymity"),
        receipt: r.text("receipt"),
    })
}

/// Decode one raw Pets row
pub fn transform_pet(row: &[String], policy: &RowPolicy) -> Result<Pet, Error> {
    let r = PET_SCHEMA.decode(row, policy)?;
    Ok(Pet {
        id: r.id(),
        name: r.text("name"),
        kind: r.text("type"),
        breed: r.text("breed"),
        age: r.uint("age"),
        description: r.text("description"),
        image: r.image("image"),
        location: r.text("location"),
        status: r.text("status"),
    })
}
