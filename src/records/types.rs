//! Typed records decoded from sheet rows
//!
//! Field names serialize in camelCase to match the shapes the site's pages
//! already consume.

use serde::{Deserialize, Serialize};

/// A care tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub image_url: String,
    pub created_at: String,
    pub pet_type: String,
    pub difficulty: String,
    pub author: String,
    pub duration: String,
    pub requirements: String,
    pub frequency: String,
    pub priority: String,
    pub featured: bool,
}

/// A community story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub author: String,
    pub preview: String,
    pub date: String,
    pub image_url: String,
    pub category: String,
    pub pet_type: String,
    pub pet_name: String,
    pub pet_age: String,
    pub breed: String,
    pub source: String,
    pub likes: u32,
    pub featured: bool,
    pub full_story: String,
}

/// A directory entry for a veterinary clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub services: Vec<String>,
    pub rating: f64,
    pub image_url: String,
    pub hours: String,
    pub emergency: bool,
    pub animals: Vec<String>,
    pub languages: Vec<String>,
    pub insurance: String,
    pub staff: Vec<String>,
    pub specialization: String,
    pub experience: String,
}

/// A pet-friendly place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub features: Vec<String>,
    pub rating: f64,
    pub description: String,
    pub image_url: String,
    pub hours: String,
    pub pet_friendly: bool,
    pub restrictions: String,
    pub size: String,
    pub amenities: Vec<String>,
    pub events: String,
    pub parking: String,
    pub established: String,
}

/// A donation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub name: String,
    pub email: String,
    pub amount: i64,
    pub tier: String,
    pub status: String,
    pub date: String,
    pub frequency: String,
    pub payment_method: String,
    pub fund: String,
    pub recurring_donor: bool,
    pub notes: String,
    pub communication: String,
    pub anonymity: String,
    pub receipt: String,
}

/// An adoptable pet listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub breed: String,
    pub age: u32,
    pub description: String,
    pub image: String,
    pub location: String,
    pub status: String,
}
