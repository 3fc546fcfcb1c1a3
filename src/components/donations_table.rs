//! Read-only donation ledger table.

use leptos::prelude::*;

use crate::components::status_badge::DonationStatusBadge;
use crate::net::types::Donation;
use crate::util::format::format_brl;

/// One page of the donation ledger. `stale` marks rows served from the
/// previous buffered block while a fresh one loads.
#[component]
pub fn DonationsTable(donations: Vec<Donation>, stale: bool) -> impl IntoView {
    if donations.is_empty() {
        return view! { <p class="data-table__empty">"No donations found."</p> }.into_any();
    }

    view! {
        <table class="data-table" class:data-table--stale=stale>
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Donor"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Destination"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {donations
                    .into_iter()
                    .map(|donation| {
                        let donor = donation.donor_name().to_owned();
                        let destination = donation.destination();
                        let date = donation.created_at.format("%d/%m/%Y").to_string();

                        view! {
                            <tr>
                                <td>{donation.id}</td>
                                <td>{donor}</td>
                                <td class="data-table__amount">{format_brl(donation.amount)}</td>
                                <td><DonationStatusBadge status=donation.status/></td>
                                <td>{destination}</td>
                                <td>{date}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
