//! Uniform REST collection client.
//!
//! Every CRUD endpoint of the API has the same shape: `GET /{path}`,
//! `GET /{path}/{id}`, `POST /{path}`, `PUT /{path}/{id}`, `DELETE /{path}/{id}`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

use crate::client::AlimentateClient;
use crate::error::ClientError;

pub struct Resource<'a> {
    client: &'a AlimentateClient,
    path: String,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(client: &'a AlimentateClient, path: String) -> Self {
        let path = path.trim_matches('/').to_string();
        Self { client, path }
    }

    pub async fn get_all<R: DeserializeOwned>(&self) -> Result<Vec<R>, ClientError> {
        self.client.get(&self.path).await
    }

    pub async fn get_by_id<R: DeserializeOwned>(&self, id: impl Display) -> Result<R, ClientError> {
        self.client.get(&self.item(id)).await
    }

    pub async fn create<A, R>(&self, body: &A) -> Result<R, ClientError>
    where
        A: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.client.post(&self.path, body).await
    }

    pub async fn update<A, R>(&self, id: impl Display, body: &A) -> Result<R, ClientError>
    where
        A: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.client.put(&self.item(id), body).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ClientError> {
        self.client.delete(&self.item(id)).await
    }

    fn item(&self, id: impl Display) -> String {
        format!("{}/{}", self.path, id)
    }
}
