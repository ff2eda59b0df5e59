use marketplace_feed::AppEntry;

const EXAMPLE: &str = r#"<entry>
    <a:updated>2013-07-20T12:00:00Z</a:updated>
    <a:title type="text">My App</a:title>
    <a:id>urn:uuid:9e04ef23-b94f-4f09-98ab-4e6d6e5a29d5</a:id>
    <version>1.2.0.0</version>
    <payloadId>urn:uuid:11111111-2222-3333-4444-555555555555</payloadId>
    <skuId>urn:uuid:aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee</skuId>
    <skuLastUpdated>2013-07-19T08:30:00Z</skuLastUpdated>
    <isAvailableInCountry>true</isAvailableInCountry>
    <isAvailableInStore>true</isAvailableInStore>
    <isClientTypeCompatible>true</isClientTypeCompatible>
    <isHardwareCompatible>true</isHardwareCompatible>
    <isBlacklisted>false</isBlacklisted>
    <url>http://marketplace.example/apps/myapp</url>
    <packageSize>1048576</packageSize>
    <installSize>2097152</installSize>
    <clientTypes><clientType>WP7</clientType><clientType>WP8</clientType></clientTypes>
    <supportedLanguages><language>en-US</language><language>pt-PT</language></supportedLanguages>
    <deviceCapabilities>&lt;capability name="ID_CAP_LOCATION"/&gt;&lt;capability name="ID_CAP_NETWORKING"/&gt;</deviceCapabilities>
</entry>"#;

fn main() {
    let entry = AppEntry::parse_str(EXAMPLE).expect("failed to parse marketplace entry");

    println!("=== Parsed Marketplace Entry ===");
    if let Some(ref title) = entry.title {
        println!("Title:          {}", title.value);
    }
    if let Some(ref id) = entry.id {
        println!("Id:             {}", id);
    }
    if let Some(ref version) = entry.version {
        println!("Version:        {}", version);
    }
    if let Some(ref payload_id) = entry.payload_id {
        println!("Payload id:     {}", payload_id);
    }
    if let Some(ref sku_id) = entry.sku_id {
        println!("SKU id:         {}", sku_id);
    }
    if let Some(updated) = entry.updated {
        println!("Updated:        {}", updated);
    }
    if let Some(sku_last_updated) = entry.sku_last_updated {
        println!("SKU updated:    {}", sku_last_updated);
    }
    if let Some(ref url) = entry.url {
        println!("Url:            {}", url);
    }
    if let Some(package_size) = entry.package_size {
        println!("Package size:   {} bytes", package_size);
    }
    if let Some(install_size) = entry.install_size {
        println!("Install size:   {} bytes", install_size);
    }
    println!(
        "Available:      country={:?} store={:?}",
        entry.is_available_in_country, entry.is_available_in_store
    );
    println!(
        "Compatible:     client={:?} hardware={:?} blacklisted={:?}",
        entry.is_client_type_compatible, entry.is_hardware_compatible, entry.is_blacklisted
    );
    if let Some(ref client_types) = entry.client_types {
        println!("Client types:   {}", client_types.join(" "));
    }
    if let Some(ref languages) = entry.supported_languages {
        println!("Languages:      {}", languages.join(" "));
    }
    if let Some(ref capabilities) = entry.device_capabilities {
        println!("Capabilities:");
        for capability in &capabilities.capabilities {
            println!("  {}", capability.id.as_deref().unwrap_or("?"));
        }
    }
}
