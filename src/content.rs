//! High-level typed content getters
//!
//! Each getter fetches a whole sheet, drops the header row, and maps the
//! remaining rows through the matching transformer — the same shape every
//! page of the site uses. Getters are independent; pages that need several
//! collections issue them concurrently and join the results.

use crate::error::Error;
use crate::records::{
    transform_donation, transform_pet, transform_place, transform_story, transform_tip,
    transform_vet, Donation, Pet, Place, Story, Tip, Vet,
};
use crate::schema::RowPolicy;
use crate::sheets::SheetsClient;

/// Typed read access to the site's content collections
pub struct ContentClient {
    sheets: SheetsClient,
    policy: RowPolicy,
}

impl ContentClient {
    /// Create a new ContentClient
    pub(crate) fn new(sheets: SheetsClient, policy: RowPolicy) -> Self {
        Self { sheets, policy }
    }

    async fn collection<T>(
        &self,
        sheet: &str,
        transform: impl Fn(&[String], &RowPolicy) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let rows = self.sheets.fetch_rows(sheet).await?;
        rows.iter()
            .skip(1) // header row
            .map(|row| transform(row, &self.policy))
            .collect()
    }

    /// All care tips
    pub async fn tips(&self) -> Result<Vec<Tip>, Error> {
        self.collection("Tips", transform_tip).await
    }

    /// All community stories
    pub async fn stories(&self) -> Result<Vec<Story>, Error> {
        self.collection("Stories", transform_story).await
    }

    /// The vet directory
    pub async fn vets(&self) -> Result<Vec<Vet>, Error> {
        self.collection("Vets", transform_vet).await
    }

    /// All pet-friendly places
    pub async fn places(&self) -> Result<Vec<Place>, Error> {
        self.collection("Places", transform_place).await
    }

    /// All donation records
    pub async fn donations(&self) -> Result<Vec<Donation>, Error> {
        self.collection("Donations", transform_donation).await
    }

    /// All adoptable pet listings
    pub async fn pets(&self) -> Result<Vec<Pet>, Error> {
        self.collection("Pets", transform_pet).await
    }
}
